use thiserror::Error;

use framesync_shared::{ConfigError, SharedStateError, TransportError};

/// Errors returned by the master frame driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MasterError {
    /// Synchronization config rejected at startup
    #[error("Invalid sync configuration: {0}")]
    Config(#[from] ConfigError),

    /// Frame serialization failed
    #[error("Shared state error: {0}")]
    SharedState(#[from] SharedStateError),

    /// Transport refused or failed to send the frame
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A frame was requested after the final exit frame was sent
    #[error("Master already finished: final frame {frame_num} has been sent")]
    Finished { frame_num: u64 },
}
