use std::default::Default;

use framesync_shared::SyncConfig;

/// Contains Config properties which will be used by a Slave
#[derive(Clone)]
pub struct SlaveConfig {
    /// Wire settings, which must match the master's
    pub sync: SyncConfig,
    /// Reject messages whose frame number does not increase
    pub require_increasing_frames: bool,
}

impl Default for SlaveConfig {
    fn default() -> Self {
        Self {
            sync: SyncConfig::default(),
            require_increasing_frames: true,
        }
    }
}
