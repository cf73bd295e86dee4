use crate::ConfigError;

/// How each object's payload is delimited inside a frame message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadFraming {
    /// Payload follows the identifier directly; `apply` reads from the message
    /// stream itself. An asymmetric commit/apply pair corrupts every object
    /// after it.
    Unframed,
    /// An 8-byte length precedes each payload and `apply` sees only that many
    /// bytes.
    LengthPrefixed,
}

/// What a slave does with an identifier it has no local object for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownReplicaPolicy {
    /// Fail the frame with `UnknownReplicaId`.
    Abort,
    /// Skip the payload, log it, and carry on with the next object.
    Skip,
}

/// Wire settings for the frame synchronization protocol.
///
/// Master and slaves of one deployment must use the same framing.
#[derive(Clone, Debug)]
pub struct SyncConfig {
    pub framing: PayloadFraming,
    pub unknown_replica: UnknownReplicaPolicy,
    /// Fail a frame when bytes remain after the last object
    pub reject_trailing_bytes: bool,
}

impl SyncConfig {
    /// Identifier followed directly by the payload, with no per-object framing.
    pub fn unframed() -> Self {
        Self {
            framing: PayloadFraming::Unframed,
            unknown_replica: UnknownReplicaPolicy::Abort,
            reject_trailing_bytes: true,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unknown_replica == UnknownReplicaPolicy::Skip
            && self.framing != PayloadFraming::LengthPrefixed
        {
            return Err(ConfigError::SkipRequiresFraming);
        }
        Ok(())
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            framing: PayloadFraming::LengthPrefixed,
            unknown_replica: UnknownReplicaPolicy::Abort,
            reject_trailing_bytes: true,
        }
    }
}
