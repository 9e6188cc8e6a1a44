//! In-process broadcast bus.

use crate::error::TransportResult;
use crate::traits::Transport;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::trace;
use vstig_core::RobotId;
use vstig_protocol::Envelope;

/// Shared medium connecting every attached robot in one process.
///
/// Models an ideal local radio: a broadcast reaches every attached robot
/// except the sender, instantly and in order per sender. Robots whose
/// inbound receiver has been dropped are pruned on the next broadcast
/// that notices them. Clones share the same medium.
#[derive(Clone, Default)]
pub struct MemoryBus {
    peers: Arc<RwLock<BTreeMap<RobotId, mpsc::UnboundedSender<Envelope>>>>,
}

impl MemoryBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a robot to the bus.
    ///
    /// Returns the robot's transport handle and the stream of envelopes
    /// it will hear. Attaching an id that is already present replaces
    /// the previous attachment; the old receiver goes silent.
    pub async fn attach(
        &self,
        robot: RobotId,
    ) -> (BusTransport, mpsc::UnboundedReceiver<Envelope>) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.peers.write().await.insert(robot, tx);
        let transport = BusTransport {
            bus: self.clone(),
            source: robot,
        };
        (transport, rx)
    }

    /// Number of robots currently attached.
    pub async fn attached(&self) -> usize {
        self.peers.read().await.len()
    }

    async fn deliver_from(&self, source: RobotId, envelope: &Envelope) -> usize {
        let mut delivered = 0;
        let mut dead = Vec::new();
        {
            let peers = self.peers.read().await;
            for (robot, sender) in peers.iter() {
                if *robot == source {
                    continue;
                }
                if sender.send(envelope.clone()).is_ok() {
                    delivered += 1;
                } else {
                    dead.push(*robot);
                }
            }
        }
        if !dead.is_empty() {
            let mut peers = self.peers.write().await;
            for robot in dead {
                peers.remove(&robot);
            }
        }
        delivered
    }
}

/// One robot's handle onto a [`MemoryBus`].
#[derive(Clone)]
pub struct BusTransport {
    bus: MemoryBus,
    source: RobotId,
}

#[async_trait]
impl Transport for BusTransport {
    async fn broadcast(&self, envelope: Envelope) -> TransportResult<()> {
        let delivered = self.bus.deliver_from(self.source, &envelope).await;
        trace!(
            source = %self.source,
            kind = ?envelope.kind,
            delivered,
            "broadcast on memory bus"
        );
        // An empty swarm is not an error; the packet just had no audience.
        Ok(())
    }

    fn transport_type(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vstig_core::{Entry, StigmergyId, Timestamp};
    use vstig_protocol::StigmergyMessage;

    fn envelope_from(robot: u32) -> Envelope {
        let entry = Entry::new(vec![9], Timestamp(1), RobotId(robot));
        let message = StigmergyMessage::new(StigmergyId(1), "k", entry);
        Envelope::update(RobotId(robot), &message).unwrap()
    }

    #[tokio::test]
    async fn broadcast_reaches_everyone_but_the_sender() {
        let bus = MemoryBus::new();
        let (t1, mut rx1) = bus.attach(RobotId(1)).await;
        let (_t2, mut rx2) = bus.attach(RobotId(2)).await;
        let (_t3, mut rx3) = bus.attach(RobotId(3)).await;

        t1.broadcast(envelope_from(1)).await.unwrap();

        assert_eq!(rx2.recv().await.unwrap().source, RobotId(1));
        assert_eq!(rx3.recv().await.unwrap().source, RobotId(1));
        assert!(rx1.try_recv().is_err());
    }

    #[tokio::test]
    async fn dead_receivers_are_pruned() {
        let bus = MemoryBus::new();
        let (t1, _rx1) = bus.attach(RobotId(1)).await;
        let (_t2, rx2) = bus.attach(RobotId(2)).await;
        drop(rx2);

        assert_eq!(bus.attached().await, 2);
        t1.broadcast(envelope_from(1)).await.unwrap();
        assert_eq!(bus.attached().await, 1);
    }

    #[tokio::test]
    async fn broadcast_into_empty_swarm_is_ok() {
        let bus = MemoryBus::new();
        let (t1, _rx1) = bus.attach(RobotId(1)).await;
        assert!(t1.broadcast(envelope_from(1)).await.is_ok());
    }
}
