//! Domain models for network configuration state.

pub mod config;
pub mod network;
pub mod state;

pub use config::{AppConfig, HttpSourceConfig, LoggingConfig};
pub use network::{Network, NetworkConfig};
pub use state::{ConfigContext, LoadState, UNKNOWN_ERROR};
