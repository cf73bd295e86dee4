pub mod frame_reader;
pub mod frame_report;
pub mod frame_state;
pub mod frame_writer;
pub mod sync_config;
