//! Application layer: the configuration provider and its consumer API.

pub mod context;
pub mod provider;

pub use context::{use_config, use_config_handle, ConfigHandle};
pub use provider::ConfigProvider;
