use thiserror::Error;

/// Errors raised by the transport adapters that carry frame messages
///
/// The transport itself lives outside framesync; these variants are how an
/// adapter reports that it cannot accept or deliver a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Transport is not ready; checked before a frame is serialized
    #[error("Transport unavailable: frame message cannot be sent")]
    Unavailable,

    /// The other end of the channel has gone away
    #[error("Transport channel closed")]
    Closed,

    /// The adapter failed to hand off a message
    #[error("Failed to send frame message of {size} bytes: {reason}")]
    SendFailed { size: usize, reason: String },
}
