//! Property-Based Tests for Conflict Resolution
//!
//! Verifies that last-writer-wins resolution over (timestamp, owner) behaves
//! as a deterministic merge: any set of entries for one key, applied in any
//! order, settles on the same winner, and re-applying already-seen entries
//! changes nothing.
//!
//! ## Properties Verified
//!
//! - Order independence: every application order yields the same final entry
//! - Idempotence: re-applying the full set after convergence is a no-op
//! - Winner characterization: the survivor maximizes timestamp, breaking
//!   ties toward the numerically lowest owner

use proptest::prelude::*;
use std::cmp::Reverse;
use vstig_core::{candidate_wins, Entry, RobotId, Timestamp};

/// Entries drawn from a deliberately small (timestamp, owner) space so that
/// shuffled runs hit equal-timestamp ties and exact duplicates often. The
/// value bytes are a function of the pair, so two entries with the same
/// (timestamp, owner) are the same write, not two conflicting ones.
fn arb_entry() -> impl Strategy<Value = Entry> {
    (0u64..16, 0u32..8).prop_map(|(ts, owner)| {
        Entry::new(
            vec![ts as u8, owner as u8],
            Timestamp(ts),
            RobotId(owner),
        )
    })
}

/// Apply a sequence of candidates to an initially empty slot.
fn run_resolution(entries: &[Entry]) -> Option<Entry> {
    let mut slot: Option<Entry> = None;
    for candidate in entries {
        if candidate_wins(slot.as_ref(), candidate) {
            slot = Some(candidate.clone());
        }
    }
    slot
}

// ============================================================================
// Convergence Properties
// ============================================================================

proptest! {
    /// Property: the final entry does not depend on application order
    #[test]
    fn prop_resolution_order_independent(
        (original, shuffled) in prop::collection::vec(arb_entry(), 1..24)
            .prop_flat_map(|entries| {
                let original = entries.clone();
                (Just(original), Just(entries).prop_shuffle())
            })
    ) {
        let a = run_resolution(&original);
        let b = run_resolution(&shuffled);

        prop_assert_eq!(a, b, "resolution must be order independent");
    }

    /// Property: re-applying every entry after convergence changes nothing
    #[test]
    fn prop_resolution_idempotent(entries in prop::collection::vec(arb_entry(), 1..24)) {
        let converged = run_resolution(&entries);

        let mut slot = converged.clone();
        for candidate in &entries {
            if candidate_wins(slot.as_ref(), candidate) {
                slot = Some(candidate.clone());
            }
        }

        prop_assert_eq!(slot, converged, "replay must be a no-op");
    }

    /// Property: the survivor is the entry with the greatest timestamp,
    /// ties broken toward the lowest owner id
    #[test]
    fn prop_winner_maximizes_timestamp_then_lowest_owner(
        entries in prop::collection::vec(arb_entry(), 1..24)
    ) {
        let winner = run_resolution(&entries);

        let expected = entries
            .iter()
            .max_by_key(|entry| (entry.timestamp, Reverse(entry.owner)))
            .cloned();

        prop_assert_eq!(winner, expected);
    }

    /// Property: an entry never loses to itself
    #[test]
    fn prop_duplicate_never_supersedes(entry in arb_entry()) {
        prop_assert!(!candidate_wins(Some(&entry), &entry));
    }

    /// Property: the stored version never regresses; each replacement
    /// carries a strictly greater timestamp, or the same timestamp with
    /// a strictly lower owner
    #[test]
    fn prop_stored_version_never_regresses(
        entries in prop::collection::vec(arb_entry(), 1..24)
    ) {
        let mut slot: Option<Entry> = None;
        for candidate in &entries {
            if candidate_wins(slot.as_ref(), candidate) {
                if let Some(previous) = &slot {
                    let advanced = candidate.timestamp > previous.timestamp
                        || (candidate.timestamp == previous.timestamp
                            && candidate.owner < previous.owner);
                    prop_assert!(advanced, "replacement must strictly advance the version");
                }
                slot = Some(candidate.clone());
            }
        }
    }
}

// ============================================================================
// Boundary Cases
// ============================================================================

#[test]
fn empty_slot_accepts_any_candidate() {
    let entry = Entry::new(b"pheromone".to_vec(), Timestamp(0), RobotId(7));
    assert!(candidate_wins(None, &entry));
}

#[test]
fn two_robot_tie_settles_on_lower_id_both_orders() {
    let low = Entry::new(b"low".to_vec(), Timestamp(5), RobotId(1));
    let high = Entry::new(b"high".to_vec(), Timestamp(5), RobotId(2));

    assert_eq!(run_resolution(&[low.clone(), high.clone()]), Some(low.clone()));
    assert_eq!(run_resolution(&[high, low.clone()]), Some(low));
}
