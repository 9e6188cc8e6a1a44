//! # vstig-store - local replica state
//!
//! Each robot keeps one [`LocalStore`]: a family of tuple structures
//! (stigmergies), each mapping string keys to versioned entries. Every
//! write, local or remote, funnels through [`LocalStore::apply`], which
//! enforces the last-writer-wins rule from `vstig-core`. That single
//! choke point is what makes replicas converge: the store never accepts
//! an entry the resolution rule would reject.
//!
//! Locking is two-level. The outer map only locks to find or create a
//! structure; per-key traffic contends only on the structure it touches.

#![forbid(unsafe_code)]

/// Applied/stale counters
pub mod metrics;

/// The per-robot replica store
pub mod store;

pub use metrics::{StoreMetrics, StoreMetricsSnapshot};
pub use store::LocalStore;
