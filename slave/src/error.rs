use thiserror::Error;

use framesync_shared::{ConfigError, SharedStateError, TransportError};

/// Errors returned by the slave frame driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlaveError {
    /// Synchronization config rejected at startup
    #[error("Invalid sync configuration: {0}")]
    Config(#[from] ConfigError),

    /// The frame message could not be applied
    #[error("Shared state error: {0}")]
    SharedState(#[from] SharedStateError),

    /// Transport failed while receiving
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Frame numbers must increase from one message to the next
    #[error("Frame {received} received after frame {last}: messages out of order")]
    FrameOutOfOrder { last: u64, received: u64 },
}
