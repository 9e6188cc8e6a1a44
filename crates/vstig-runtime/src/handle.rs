//! Typed handles onto tuple structures.

use crate::runtime::StigmergyRuntime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::debug;
use vstig_core::{BincodeCodec, Entry, PayloadCodec, Result, StigmergyId, VstigError};
use vstig_protocol::{Envelope, StigmergyMessage};

/// A typed view onto one tuple structure.
///
/// The handle is the whole application API: `put` writes, `get` reads,
/// `size` counts. Handles are cheap to clone and share; every clone talks
/// to the same runtime and the same replica state.
///
/// `T` is the application value type, `C` the codec that turns it into
/// stored bytes. The default codec is [`BincodeCodec`].
pub struct VirtualStigmergy<T, C = BincodeCodec> {
    runtime: StigmergyRuntime,
    id: StigmergyId,
    _payload: PhantomData<fn() -> (T, C)>,
}

impl<T, C> Clone for VirtualStigmergy<T, C> {
    fn clone(&self) -> Self {
        Self {
            runtime: self.runtime.clone(),
            id: self.id,
            _payload: PhantomData,
        }
    }
}

impl<T, C> VirtualStigmergy<T, C> {
    pub(crate) fn new(runtime: StigmergyRuntime, id: StigmergyId) -> Self {
        runtime.store().create(id);
        Self {
            runtime,
            id,
            _payload: PhantomData,
        }
    }

    /// Identifier of the structure this handle views.
    pub fn id(&self) -> StigmergyId {
        self.id
    }

    /// Number of keys currently stored.
    pub fn size(&self) -> usize {
        self.runtime.store().size(self.id)
    }

    /// Whether a key currently has an entry.
    pub fn contains(&self, key: &str) -> bool {
        self.runtime.store().contains(self.id, key)
    }
}

impl<T, C> VirtualStigmergy<T, C>
where
    T: Serialize + DeserializeOwned,
    C: PayloadCodec,
{
    /// Write a value under a key and announce it to the swarm.
    ///
    /// The entry is stamped with this robot's id and the current clock
    /// second, applied locally through conflict resolution, and queued
    /// for broadcast. The broadcast happens even when the local apply
    /// lost to a concurrent write already in the store: neighbours run
    /// the same resolution and discard whichever side is stale, so
    /// suppressing the packet would only slow convergence.
    pub fn put(&self, key: &str, value: &T) -> Result<()> {
        let bytes = C::encode(value)?;
        let entry = Entry::new(bytes, self.runtime.clock().now(), self.runtime.robot());

        let applied = self.runtime.store().apply(self.id, key, entry.clone());
        if !applied {
            debug!(
                stigmergy = %self.id,
                key = %key,
                "local write lost resolution, broadcasting anyway"
            );
        }

        let message = StigmergyMessage::new(self.id, key, entry);
        let envelope = Envelope::update(self.runtime.robot(), &message)?;
        self.runtime.outbound().push(envelope);
        Ok(())
    }

    /// Read the value under a key.
    ///
    /// Fails with [`VstigError::KeyNotFound`] when the key has no entry
    /// on this replica yet; a failed read has no side effects. When read
    /// notifications are enabled, a successful read queues a query packet
    /// mirroring the entry exactly as it was read, original owner and
    /// timestamp included.
    pub fn get(&self, key: &str) -> Result<T> {
        let entry = self
            .runtime
            .store()
            .read(self.id, key)
            .ok_or_else(|| VstigError::key_not_found(self.id, key))?;

        let value = C::decode(&entry.value)?;

        if self.runtime.config().emit_read_notifications {
            let message = StigmergyMessage::new(self.id, key, entry);
            let envelope = Envelope::query(self.runtime.robot(), &message)?;
            self.runtime.outbound().push(envelope);
        }

        Ok(value)
    }

    /// Read a key that may legitimately be absent.
    ///
    /// `None` means not found; other failures still surface as errors.
    pub fn try_get(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(VstigError::KeyNotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
