mod master;
mod master_config;

pub use master::Master;
pub use master_config::MasterConfig;
