pub mod registry_handle;
pub mod shared_registry;
