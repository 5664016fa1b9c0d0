//! Ports (interfaces) implemented by infrastructure adapters.

pub mod config_source;

pub use config_source::ConfigSource;
