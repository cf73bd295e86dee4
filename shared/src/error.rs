use thiserror::Error;

use framesync_serde::SerdeErr;

/// Errors that can occur while producing or applying a frame message
///
/// The binary layout has no resynchronization markers, so every variant is fatal
/// for the frame in which it occurs. Nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharedStateError {
    /// A length prefix or fixed-width field did not fit the received buffer
    #[error("Protocol corruption: {0}")]
    ProtocolCorruption(#[from] SerdeErr),

    /// Object count decoded as a negative number
    #[error("Protocol corruption: negative object count {count}")]
    NegativeObjectCount { count: i32 },

    /// Object count cannot possibly fit in what is left of the message
    #[error("Protocol corruption: object count {count} cannot fit in {remaining} remaining bytes")]
    ObjectCountExceedsBuffer { count: i32, remaining: usize },

    /// Slave received an identifier it has no local object for
    #[error("Could not find shared object key {id}: master and slave registries are out of sync")]
    UnknownReplicaId { id: String },

    /// A framed payload was not fully consumed by the object's apply
    #[error("Shared object {id} consumed {consumed} of {declared} payload bytes")]
    PayloadSizeMismatch {
        id: String,
        declared: usize,
        consumed: usize,
    },

    /// An object's apply failed while decoding its own payload
    #[error("Shared object {id} failed to apply its payload: {source}")]
    PayloadCorruption {
        id: String,
        #[source]
        source: SerdeErr,
    },

    /// Bytes were left over after the last object was applied
    #[error("Protocol corruption: {remaining} trailing bytes after the last object")]
    TrailingBytes { remaining: usize },

    /// A pass was started while another one was still running
    #[error("Cannot start a frame pass while another frame is in progress")]
    FrameInProgress,

    /// The registry snapshot does not fit the 4-byte signed object count
    #[error("Cannot serialize {count} shared objects in a single frame")]
    TooManyObjects { count: usize },

    /// An object was already mutably borrowed when the pass reached it
    #[error("Shared object {id} is borrowed elsewhere and cannot be {operation}")]
    ObjectBusy {
        id: String,
        operation: &'static str,
    },
}

/// Errors in a synchronization configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Unknown identifiers can only be skipped when each payload is length-framed
    #[error("UnknownReplicaPolicy::Skip requires PayloadFraming::LengthPrefixed")]
    SkipRequiresFraming,
}
