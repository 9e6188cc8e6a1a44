//! Pump tasks between a runtime and its transport.
//!
//! Both pumps are deliberately dumb loops. Failures are logged and the
//! loop keeps going; a stigmergy swarm treats every packet as expendable
//! because conflict resolution reconverges from whatever does arrive.

use crate::traits::Transport;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use vstig_protocol::Envelope;
use vstig_runtime::{OutboundReceiver, StigmergyRuntime};

/// Drive the runtime's outbound queue onto a transport.
///
/// Runs until the runtime (every producer handle of the queue) is gone.
pub fn spawn_outbound_pump(
    mut outbound: OutboundReceiver,
    transport: Arc<dyn Transport>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(envelope) = outbound.recv().await {
            if let Err(err) = transport.broadcast(envelope).await {
                warn!(
                    transport = transport.transport_type(),
                    error = %err,
                    "broadcast failed, packet lost"
                );
            }
        }
        debug!("outbound pump stopped, runtime gone");
    })
}

/// Feed envelopes heard on the medium into a runtime.
///
/// Runs until the transport side drops the sender.
pub fn spawn_inbound_pump(
    mut inbound: mpsc::UnboundedReceiver<Envelope>,
    runtime: StigmergyRuntime,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(envelope) = inbound.recv().await {
            if let Err(err) = runtime.handle_envelope(&envelope) {
                warn!(
                    source = %envelope.source,
                    error = %err,
                    "rejected inbound envelope"
                );
            }
        }
        debug!("inbound pump stopped, transport gone");
    })
}
