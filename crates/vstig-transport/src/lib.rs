//! # vstig-transport - moving envelopes between robots
//!
//! The runtime produces and consumes envelopes but never talks to a
//! network. This crate closes the loop: a [`Transport`] broadcasts
//! envelopes to whoever can hear them, and two pump tasks shuttle packets
//! between a runtime and its transport.
//!
//! Wiring one robot onto a bus takes three lines:
//!
//! ```ignore
//! let (transport, inbound) = bus.attach(runtime.robot()).await;
//! spawn_outbound_pump(outbound, Arc::new(transport));
//! spawn_inbound_pump(inbound, runtime.clone());
//! ```
//!
//! [`MemoryBus`] is the in-process implementation used for tests and
//! simulation; radio or ROS-topic backends implement the same trait.
//! Delivery is best effort end to end: a failed broadcast is logged and
//! the packet forgotten, matching what a lossy radio does anyway. The
//! store's conflict resolution is what makes that safe.

#![forbid(unsafe_code)]

/// Transport failures
pub mod error;

/// In-process broadcast bus
pub mod memory;

/// Pump tasks between runtime and transport
pub mod pump;

/// The broadcast transport trait
pub mod traits;

pub use error::{TransportError, TransportResult};
pub use memory::{BusTransport, MemoryBus};
pub use pump::{spawn_inbound_pump, spawn_outbound_pump};
pub use traits::Transport;
