//! Pure conflict resolution for concurrent writes.
//!
//! This is the convergence kernel of the whole system: every replica runs
//! the same decision over the same candidates and therefore reaches the
//! same map state, regardless of delivery order, duplication, or loss.

use crate::entry::Entry;

/// Decide whether `candidate` should replace `stored`.
///
/// Rules, applied in order:
/// 1. nothing stored: the candidate wins unconditionally
/// 2. greater timestamp wins
/// 3. equal timestamps: the numerically lower owner id wins
/// 4. otherwise the stored entry is retained; the candidate is a stale
///    write, silently discarded (a normal outcome, not an error)
///
/// Rules 2 and 3 define a strict total order over distinct `(timestamp, owner)`
/// pairs, which makes application commutative and idempotent: any
/// permutation of a candidate set, with any amount of duplication,
/// converges on the entry with the greatest timestamp, ties broken by
/// lowest owner.
pub fn candidate_wins(stored: Option<&Entry>, candidate: &Entry) -> bool {
    match stored {
        None => true,
        Some(current) => candidate.supersedes(current),
    }
}
