mod slave;
mod slave_config;

pub use slave::Slave;
pub use slave_config::SlaveConfig;
