use thiserror::Error;

/// Errors that can occur while decoding a byte stream
///
/// SECURITY: frame messages arrive from another process. Every decode path returns
/// one of these instead of panicking or reading out of bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// A fixed-width read needed more bytes than the stream holds
    #[error("Unexpected end of stream: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd { needed: usize, remaining: usize },

    /// A length prefix declared more bytes than the stream holds
    #[error("Declared length {declared} exceeds remaining buffer size {remaining}")]
    LengthExceedsRemaining { declared: u64, remaining: usize },

    /// String payload was not valid UTF-8
    #[error("String payload of {length} bytes is not valid UTF-8")]
    InvalidUtf8 { length: usize },

    /// A decoded discriminant or flag had no valid meaning
    #[error("Invalid value {value} for {type_name}")]
    InvalidValue {
        type_name: &'static str,
        value: u64,
    },
}
