//! # Framesync Shared
//! Replicated shared-state registry and frame synchronization protocol used by
//! the framesync master & slave crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use framesync_serde::{
    ByteCounter, ByteReader, ByteWrite, ByteWriter, ConstByteLength, Serde, SerdeErr,
    LENGTH_PREFIX_BYTES,
};

mod error;
mod frame;
mod registry;
mod shared_data;
mod shared_object;
mod transport;
mod types;
mod update_context;

pub use error::{ConfigError, SharedStateError};
pub use frame::{
    frame_reader::FrameReader,
    frame_report::FrameReport,
    frame_state::FrameState,
    frame_writer::FrameWriter,
    sync_config::{PayloadFraming, SyncConfig, UnknownReplicaPolicy},
};
pub use registry::{registry_handle::RegistryHandle, shared_registry::SharedRegistry};
pub use shared_data::SharedData;
pub use shared_object::{SharedObject, SharedObjectRef};
pub use transport::{error::TransportError, FrameReceiver, FrameSender};
pub use types::{FrameNumber, NodeRole};
pub use update_context::UpdateContext;
