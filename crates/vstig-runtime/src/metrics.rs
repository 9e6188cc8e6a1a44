//! Inbound-path counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters over the runtime's inbound path.
///
/// Update apply/discard counts live with the store; these track the
/// protocol-level events the store never sees.
#[derive(Debug, Default)]
pub struct RuntimeMetrics {
    /// Query packets observed from neighbours
    queries_observed: AtomicU64,
    /// Own broadcasts heard back and ignored
    self_echoes: AtomicU64,
    /// Envelopes rejected before reaching the store (wrong version or
    /// undecodable payload)
    rejected_envelopes: AtomicU64,
}

impl RuntimeMetrics {
    pub(crate) fn record_query_observed(&self) {
        self.queries_observed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_self_echo(&self) {
        self.self_echoes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.rejected_envelopes.fetch_add(1, Ordering::Relaxed);
    }

    /// Query packets observed from neighbours.
    pub fn queries_observed(&self) -> u64 {
        self.queries_observed.load(Ordering::Relaxed)
    }

    /// Own broadcasts heard back and ignored.
    pub fn self_echoes(&self) -> u64 {
        self.self_echoes.load(Ordering::Relaxed)
    }

    /// Envelopes rejected before reaching the store.
    pub fn rejected_envelopes(&self) -> u64 {
        self.rejected_envelopes.load(Ordering::Relaxed)
    }

    /// Capture a point-in-time copy of the counters.
    pub fn snapshot(&self) -> RuntimeMetricsSnapshot {
        RuntimeMetricsSnapshot {
            queries_observed: self.queries_observed(),
            self_echoes: self.self_echoes(),
            rejected_envelopes: self.rejected_envelopes(),
        }
    }
}

/// Plain-value copy of [`RuntimeMetrics`] for logging and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuntimeMetricsSnapshot {
    /// Query packets observed from neighbours.
    pub queries_observed: u64,
    /// Own broadcasts heard back and ignored.
    pub self_echoes: u64,
    /// Envelopes rejected before reaching the store.
    pub rejected_envelopes: u64,
}
