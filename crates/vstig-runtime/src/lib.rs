//! # vstig-runtime - the per-robot stigmergy runtime
//!
//! One [`StigmergyRuntime`] runs on each robot. It owns the local replica
//! store, stamps local writes with the robot's identity and clock, queues
//! outbound packets for whatever transport the integrator wires up, and
//! merges inbound envelopes from neighbours.
//!
//! Application code never touches the runtime's internals directly; it
//! works through typed [`VirtualStigmergy`] handles:
//!
//! ```ignore
//! let (runtime, outbound) = StigmergyRuntime::new(RuntimeConfig::new(RobotId(7)));
//! let vstig = runtime.stigmergy::<f64>(StigmergyId(1));
//! vstig.put("food_direction", &1.57)?;
//! let heading = vstig.get("food_direction")?;
//! ```
//!
//! ## Dataflow
//!
//! - `put` applies locally, then always queues an update packet, even when
//!   the local apply lost conflict resolution to a concurrent write
//! - `get` reads locally and, when enabled, queues a query packet that
//!   mirrors the entry it read
//! - inbound update envelopes go through [`StigmergyRuntime::handle_envelope`],
//!   which merges them under the same resolution rule as local writes
//! - inbound query envelopes are counted and logged, never merged
//!
//! The outbound queue is unbounded: a robot's behavior loop must never
//! block on networking.

#![forbid(unsafe_code)]

/// Runtime configuration
pub mod config;

/// Typed per-structure handles
pub mod handle;

/// Inbound-path counters
pub mod metrics;

/// The non-blocking outbound packet queue
pub mod outbound;

/// The runtime itself
pub mod runtime;

pub use config::RuntimeConfig;
pub use handle::VirtualStigmergy;
pub use metrics::{RuntimeMetrics, RuntimeMetricsSnapshot};
pub use outbound::{OutboundQueue, OutboundReceiver};
pub use runtime::{InboundOutcome, StigmergyRuntime};
