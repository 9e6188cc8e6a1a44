//! The per-robot runtime.

use crate::config::RuntimeConfig;
use crate::handle::VirtualStigmergy;
use crate::metrics::RuntimeMetrics;
use crate::outbound::{self, OutboundQueue, OutboundReceiver};
use std::sync::Arc;
use tracing::{debug, trace};
use vstig_core::{Clock, PayloadCodec, Result, RobotId, StigmergyId, SystemClock};
use vstig_protocol::{Envelope, PacketKind, StigmergyMessage};
use vstig_store::LocalStore;

/// What became of an inbound envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundOutcome {
    /// Update won conflict resolution and was merged.
    Applied,
    /// Update lost conflict resolution and was discarded.
    Stale,
    /// Query was counted and logged; the store was not touched.
    QueryObserved,
    /// Our own broadcast came back and was ignored.
    SelfEcho,
}

/// One robot's stigmergy runtime.
///
/// Owns the replica store, the clock that stamps local writes, and the
/// producer side of the outbound queue. The runtime is explicitly
/// constructed, never a process-wide global, so tests can run several
/// robots side by side. Cloning is cheap and every clone shares the same
/// state; hand clones to application tasks and the inbound pump alike.
#[derive(Clone)]
pub struct StigmergyRuntime {
    config: RuntimeConfig,
    clock: Arc<dyn Clock>,
    store: Arc<LocalStore>,
    outbound: OutboundQueue,
    metrics: Arc<RuntimeMetrics>,
}

impl StigmergyRuntime {
    /// Create a runtime stamping writes with the system wall clock.
    ///
    /// Returns the runtime and the consumer side of its outbound queue;
    /// hand the receiver to a transport pump (or drain it manually in
    /// tests).
    pub fn new(config: RuntimeConfig) -> (Self, OutboundReceiver) {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a runtime with an explicit clock source.
    pub fn with_clock(config: RuntimeConfig, clock: Arc<dyn Clock>) -> (Self, OutboundReceiver) {
        let (outbound, receiver) = outbound::channel();
        let runtime = Self {
            config,
            clock,
            store: Arc::new(LocalStore::new()),
            outbound,
            metrics: Arc::new(RuntimeMetrics::default()),
        };
        (runtime, receiver)
    }

    /// This robot's identity.
    pub fn robot(&self) -> RobotId {
        self.config.robot
    }

    /// The configuration the runtime was built with.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The local replica store.
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Producer side of the outbound queue.
    pub fn outbound(&self) -> &OutboundQueue {
        &self.outbound
    }

    /// Inbound-path counters.
    pub fn metrics(&self) -> &RuntimeMetrics {
        &self.metrics
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Open a typed handle on a tuple structure, creating it locally if
    /// this robot has not touched it before.
    pub fn stigmergy<T>(&self, id: StigmergyId) -> VirtualStigmergy<T> {
        VirtualStigmergy::new(self.clone(), id)
    }

    /// Open a handle with a payload codec other than the bincode default.
    pub fn stigmergy_with_codec<T, C: PayloadCodec>(
        &self,
        id: StigmergyId,
    ) -> VirtualStigmergy<T, C> {
        VirtualStigmergy::new(self.clone(), id)
    }

    /// Merge one envelope heard from the swarm.
    ///
    /// Self-echoes are ignored before the payload is even parsed. An
    /// envelope that fails the version gate or does not decode is
    /// counted, rejected, and changes nothing. Query packets are
    /// observed only; a query must never mutate the store.
    pub fn handle_envelope(&self, envelope: &Envelope) -> Result<InboundOutcome> {
        if envelope.source == self.config.robot {
            self.metrics.record_self_echo();
            return Ok(InboundOutcome::SelfEcho);
        }

        let message = envelope.open().map_err(|err| {
            self.metrics.record_rejected();
            err
        })?;
        let StigmergyMessage {
            stigmergy,
            key,
            entry,
        } = message;

        match envelope.kind {
            PacketKind::Update => {
                let timestamp = entry.timestamp;
                let owner = entry.owner;
                if self.store.apply(stigmergy, &key, entry) {
                    debug!(
                        source = %envelope.source,
                        stigmergy = %stigmergy,
                        key = %key,
                        timestamp = %timestamp,
                        owner = %owner,
                        "applied remote update"
                    );
                    Ok(InboundOutcome::Applied)
                } else {
                    trace!(
                        source = %envelope.source,
                        stigmergy = %stigmergy,
                        key = %key,
                        "discarded stale update"
                    );
                    Ok(InboundOutcome::Stale)
                }
            }
            PacketKind::Query => {
                self.metrics.record_query_observed();
                trace!(
                    source = %envelope.source,
                    stigmergy = %stigmergy,
                    key = %key,
                    "observed remote read"
                );
                Ok(InboundOutcome::QueryObserved)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vstig_core::{Entry, Timestamp, VstigError};

    fn runtime(robot: u32) -> (StigmergyRuntime, OutboundReceiver) {
        StigmergyRuntime::new(RuntimeConfig::new(RobotId(robot)))
    }

    fn update_from(robot: u32, ts: u64, key: &str) -> Envelope {
        let entry = Entry::new(vec![7], Timestamp(ts), RobotId(robot));
        let message = StigmergyMessage::new(StigmergyId(1), key, entry);
        Envelope::update(RobotId(robot), &message).unwrap()
    }

    #[test]
    fn own_broadcast_is_ignored() {
        let (runtime, _rx) = runtime(3);
        let outcome = runtime.handle_envelope(&update_from(3, 10, "k")).unwrap();
        assert_eq!(outcome, InboundOutcome::SelfEcho);
        assert_eq!(runtime.store().size(StigmergyId(1)), 0);
        assert_eq!(runtime.metrics().self_echoes(), 1);
    }

    #[test]
    fn version_gate_fires_before_payload_parse() {
        let (runtime, _rx) = runtime(3);
        let mut envelope = update_from(5, 10, "k");
        envelope.version = 99;
        // Payload itself is fine; only the version is off.
        let result = runtime.handle_envelope(&envelope);
        assert!(matches!(result, Err(VstigError::VersionMismatch { got: 99, .. })));
        assert_eq!(runtime.metrics().rejected_envelopes(), 1);
        assert_eq!(runtime.store().size(StigmergyId(1)), 0);
    }

    #[test]
    fn inbound_update_lands_in_store() {
        let (runtime, _rx) = runtime(3);
        let outcome = runtime.handle_envelope(&update_from(5, 10, "k")).unwrap();
        assert_eq!(outcome, InboundOutcome::Applied);
        assert!(runtime.store().contains(StigmergyId(1), "k"));
    }

    #[test]
    fn clones_share_state() {
        let (runtime, _rx) = runtime(3);
        let clone = runtime.clone();

        runtime.handle_envelope(&update_from(5, 10, "k")).unwrap();
        assert!(clone.store().contains(StigmergyId(1), "k"));
    }
}
