//! Per-robot replica store.

use crate::metrics::StoreMetrics;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use vstig_core::{candidate_wins, Entry, StigmergyId};

type KeyMap = BTreeMap<String, Entry>;

/// One robot's replica of every tuple structure it participates in.
///
/// All mutation goes through [`apply`](Self::apply); reads never create
/// state, so probing an unknown structure is free and side-effect free.
/// The store is shared across the runtime and transport pumps behind an
/// `Arc`, hence every method takes `&self`.
#[derive(Debug, Default)]
pub struct LocalStore {
    maps: RwLock<BTreeMap<StigmergyId, Arc<RwLock<KeyMap>>>>,
    metrics: StoreMetrics,
}

impl LocalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a tuple structure exists.
    ///
    /// Creating an existing structure is a no-op; its entries survive.
    pub fn create(&self, stigmergy: StigmergyId) {
        self.map_for(stigmergy);
    }

    /// Find the structure's key map, creating it on first touch.
    fn map_for(&self, stigmergy: StigmergyId) -> Arc<RwLock<KeyMap>> {
        {
            let maps = self.maps.read();
            if let Some(map) = maps.get(&stigmergy) {
                return Arc::clone(map);
            }
        }
        // Read guard released; take the write lock to insert. A racing
        // creator is harmless: entry() keeps whichever map landed first.
        let mut maps = self.maps.write();
        Arc::clone(maps.entry(stigmergy).or_default())
    }

    /// Offer a candidate entry to the resolution rule.
    ///
    /// Returns `true` when the candidate won and now backs the key,
    /// `false` when the stored entry was newer (or the same write seen
    /// again) and the candidate was discarded. Unknown structures are
    /// created on the fly so a robot can learn about a stigmergy from
    /// the first update it hears.
    pub fn apply(&self, stigmergy: StigmergyId, key: &str, candidate: Entry) -> bool {
        let map = self.map_for(stigmergy);
        let mut entries = map.write();
        if candidate_wins(entries.get(key), &candidate) {
            entries.insert(key.to_owned(), candidate);
            self.metrics.record_applied();
            true
        } else {
            self.metrics.record_stale();
            false
        }
    }

    /// Read the entry backing a key, if any.
    pub fn read(&self, stigmergy: StigmergyId, key: &str) -> Option<Entry> {
        let map = self.existing_map(stigmergy)?;
        let entries = map.read();
        entries.get(key).cloned()
    }

    /// Number of keys currently stored in a structure.
    pub fn size(&self, stigmergy: StigmergyId) -> usize {
        self.existing_map(stigmergy)
            .map_or(0, |map| map.read().len())
    }

    /// Whether a key currently has an entry.
    pub fn contains(&self, stigmergy: StigmergyId, key: &str) -> bool {
        self.existing_map(stigmergy)
            .is_some_and(|map| map.read().contains_key(key))
    }

    /// All keys of a structure, in lexicographic order.
    pub fn keys(&self, stigmergy: StigmergyId) -> Vec<String> {
        self.existing_map(stigmergy)
            .map_or_else(Vec::new, |map| map.read().keys().cloned().collect())
    }

    /// Identifiers of every structure this replica holds.
    pub fn stigmergy_ids(&self) -> Vec<StigmergyId> {
        self.maps.read().keys().copied().collect()
    }

    /// Write-path counters.
    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    fn existing_map(&self, stigmergy: StigmergyId) -> Option<Arc<RwLock<KeyMap>>> {
        self.maps.read().get(&stigmergy).map(Arc::clone)
    }
}
