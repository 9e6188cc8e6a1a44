//! Core transport trait definition.

use crate::error::TransportResult;
use async_trait::async_trait;
use vstig_protocol::Envelope;

/// One-to-all delivery of stigmergy envelopes.
///
/// Stigmergy traffic is pure broadcast: every packet is addressed to
/// whoever can hear it, so the trait has no notion of a recipient. An
/// implementation should not deliver a robot's packets back to itself,
/// but the runtime tolerates echoes from media that do.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Broadcast an envelope to every reachable robot.
    async fn broadcast(&self, envelope: Envelope) -> TransportResult<()>;

    /// Transport type identifier for logs.
    fn transport_type(&self) -> &'static str;
}
