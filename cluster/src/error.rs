use thiserror::Error;

/// Errors that can occur while preparing or launching a cluster
#[derive(Debug, Error)]
pub enum ClusterError {
    /// No node in the display configuration is enabled
    #[error("Display configuration has no enabled nodes")]
    NoEnabledNodes,

    /// The configuration file could not be written
    #[error("Could not create configuration file {path} - check for write permissions: {source}")]
    ConfigWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A launcher or killer template expanded to an empty command line
    #[error("Command template '{template}' expands to an empty command")]
    EmptyCommand { template: String },

    /// The operating system refused to start a process
    #[error("Failed to launch {executable}: {source}")]
    LaunchFailed {
        executable: String,
        #[source]
        source: std::io::Error,
    },
}
