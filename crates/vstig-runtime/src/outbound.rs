//! Non-blocking outbound packet queue.
//!
//! Local puts and gets happen inside a robot's behavior loop, which must
//! never stall on networking. The queue is therefore unbounded and
//! [`OutboundQueue::push`] always returns immediately; if the consuming
//! pump has gone away the packet is counted as dropped rather than
//! blocking or erroring the caller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;
use vstig_protocol::Envelope;

/// Producer side, held by the runtime and cloned freely.
#[derive(Debug, Clone)]
pub struct OutboundQueue {
    tx: mpsc::UnboundedSender<Envelope>,
    depth: Arc<AtomicU64>,
    dropped: Arc<AtomicU64>,
}

/// Consumer side, handed to the transport pump.
#[derive(Debug)]
pub struct OutboundReceiver {
    rx: mpsc::UnboundedReceiver<Envelope>,
    depth: Arc<AtomicU64>,
}

/// Create a connected queue/receiver pair.
pub fn channel() -> (OutboundQueue, OutboundReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let depth = Arc::new(AtomicU64::new(0));
    let queue = OutboundQueue {
        tx,
        depth: Arc::clone(&depth),
        dropped: Arc::new(AtomicU64::new(0)),
    };
    (queue, OutboundReceiver { rx, depth })
}

impl OutboundQueue {
    /// Enqueue an envelope without blocking.
    ///
    /// A missing consumer drops the packet and bumps the counter; the
    /// caller's write has already been applied locally either way.
    pub fn push(&self, envelope: Envelope) {
        match self.tx.send(envelope) {
            Ok(()) => {
                self.depth.fetch_add(1, Ordering::Relaxed);
            }
            Err(_) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                warn!("outbound consumer gone, dropping packet");
            }
        }
    }

    /// Packets enqueued but not yet taken by the consumer.
    pub fn depth(&self) -> u64 {
        self.depth.load(Ordering::Relaxed)
    }

    /// Packets dropped because no consumer was attached.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl OutboundReceiver {
    /// Wait for the next outbound envelope.
    ///
    /// Returns `None` once every producer handle is gone and the queue
    /// has drained.
    pub async fn recv(&mut self) -> Option<Envelope> {
        let envelope = self.rx.recv().await;
        if envelope.is_some() {
            self.depth.fetch_sub(1, Ordering::Relaxed);
        }
        envelope
    }

    /// Take the next envelope if one is already queued.
    pub fn try_recv(&mut self) -> Option<Envelope> {
        match self.rx.try_recv() {
            Ok(envelope) => {
                self.depth.fetch_sub(1, Ordering::Relaxed);
                Some(envelope)
            }
            Err(_) => None,
        }
    }
}
