//! # Framesync Slave
//! Receives frame messages from the master and applies them to the objects
//! registered on this render node.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use framesync_shared::{
        ByteReader, ByteWrite, FrameReceiver, FrameReport, PayloadFraming, RegistryHandle, Serde,
        SerdeErr, SharedObject, SyncConfig, TransportError, UnknownReplicaPolicy, UpdateContext,
    };
}

mod error;
mod slave;

pub use error::SlaveError;
pub use slave::{Slave, SlaveConfig};
