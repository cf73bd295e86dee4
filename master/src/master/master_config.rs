use std::default::Default;

use framesync_shared::SyncConfig;

/// Contains Config properties which will be used by the Master
#[derive(Clone)]
pub struct MasterConfig {
    /// Wire settings, which must match every slave's
    pub sync: SyncConfig,
    /// Frame number of the first frame sent
    pub first_frame: u64,
    /// Absolute time reported before the first frame
    pub start_time: f64,
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            sync: SyncConfig::default(),
            first_frame: 0,
            start_time: 0.0,
        }
    }
}
