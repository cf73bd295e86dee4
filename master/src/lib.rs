//! # Framesync Master
//! Drives the replicated shared state on the master node: advances the frame
//! clock, serializes every registered object and sends the resulting message to
//! the slaves.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use framesync_shared::{
        ByteReader, ByteWrite, ByteWriter, FrameReport, FrameSender, PayloadFraming,
        RegistryHandle, Serde, SerdeErr, SharedObject, SyncConfig, TransportError,
        UnknownReplicaPolicy, UpdateContext,
    };
}

mod error;
mod master;

pub use error::MasterError;
pub use master::{Master, MasterConfig};
