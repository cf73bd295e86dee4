//! # Framesync Cluster
//! Generates the cluster display configuration consumed by the rendering
//! framework and plans the processes that launch and kill render nodes.

#[macro_use]
extern crate cfg_if;

mod block;
mod display_config;
mod error;
mod generator;
mod launcher;

pub use block::{BlockWriter, ConfigBlock, ConfigDocument, ConfigEntry};
pub use display_config::{CanvasRect, DisplayConfig, NodeConfig, TileConfig, LOCAL_HOSTNAME};
pub use error::ClusterError;
pub use generator::{
    display_port_from_env, generate, parse_display_port, write_config_file, CONFIG_HEADER,
};
pub use launcher::{
    kill_plan, launch_cluster, launch_plan, node_args, CommandLauncher, LaunchContext,
    NodeCommand, ProcessLauncher, ProcessSpec,
};
