//! # Framesync Serde
//! Byte-oriented serialization used by framesync frame messages.
//!
//! Every scalar is written little-endian at its natural width. Variable-length
//! values (strings, vectors) carry an 8-byte unsigned length prefix.

mod byte_reader;
mod byte_writer;
mod error;
mod impls;
mod serde;

pub use byte_reader::ByteReader;
pub use byte_writer::{ByteCounter, ByteWrite, ByteWriter};
pub use error::SerdeErr;
pub use serde::{ConstByteLength, Serde};

/// Width in bytes of every length prefix on the wire.
pub const LENGTH_PREFIX_BYTES: usize = 8;
