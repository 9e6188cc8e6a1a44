//! Transport errors.

use thiserror::Error;

/// Failures a transport can report from `broadcast`.
///
/// Transports report, they do not retry: the caller decides whether a
/// lost packet matters, and for stigmergy gossip it never does.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport has shut down and will not deliver again.
    #[error("transport closed: {0}")]
    Closed(String),

    /// A broadcast attempt failed.
    #[error("send failed: {0}")]
    SendFailed(String),
}

impl TransportError {
    /// Create a closed-transport error.
    pub fn closed(reason: impl Into<String>) -> Self {
        Self::Closed(reason.into())
    }

    /// Create a send-failure error.
    pub fn send_failed(reason: impl Into<String>) -> Self {
        Self::SendFailed(reason.into())
    }
}

/// Result alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
