//! Store-level counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters over the store's write path.
///
/// `applied` and `stale` partition every call to
/// [`LocalStore::apply`](crate::LocalStore::apply): a candidate either
/// won resolution and landed, or lost and was discarded.
#[derive(Debug, Default)]
pub struct StoreMetrics {
    /// Writes that won resolution and were stored
    applied: AtomicU64,
    /// Writes discarded as stale by resolution
    stale: AtomicU64,
}

impl StoreMetrics {
    pub(crate) fn record_applied(&self) {
        self.applied.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_stale(&self) {
        self.stale.fetch_add(1, Ordering::Relaxed);
    }

    /// Writes that won resolution and were stored.
    pub fn applied(&self) -> u64 {
        self.applied.load(Ordering::Relaxed)
    }

    /// Writes discarded as stale.
    pub fn stale(&self) -> u64 {
        self.stale.load(Ordering::Relaxed)
    }

    /// Capture a consistent point-in-time copy of the counters.
    pub fn snapshot(&self) -> StoreMetricsSnapshot {
        StoreMetricsSnapshot {
            applied: self.applied(),
            stale: self.stale(),
        }
    }
}

/// Plain-value copy of [`StoreMetrics`] for logging and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreMetricsSnapshot {
    /// Writes that won resolution and were stored.
    pub applied: u64,
    /// Writes discarded as stale.
    pub stale: u64,
}
