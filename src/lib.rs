//! netconfig - Network Configuration Provider
//!
//! Loads a JSON list of networks (each with a display icon) from a URL,
//! holds it as observable state and answers case-insensitive icon lookups.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): network models, load state, errors and the
//!   [`ConfigSource`] port
//! - **Application Layer** (`application`): the [`ConfigProvider`] and its
//!   consumer API ([`ConfigHandle`], [`use_config`])
//! - **Infrastructure Layer** (`infrastructure`): HTTP source, configuration
//!   loading, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use netconfig::{use_config, ConfigProvider, HttpConfigSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = Arc::new(HttpConfigSource::new()?);
//!     let provider = ConfigProvider::mount(source, "https://example.com/networks.json");
//!
//!     provider
//!         .scope(async {
//!             let ctx = netconfig::use_config_handle()?.settled().await?;
//!             println!("{:?}", ctx.get_network_icon("ethereum"));
//!             assert_eq!(use_config()?, ctx);
//!             Ok::<_, anyhow::Error>(())
//!         })
//!         .await
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{use_config, use_config_handle, ConfigHandle, ConfigProvider};
pub use domain::errors::{ContextError, FetchError};
pub use domain::models::{
    AppConfig, ConfigContext, HttpSourceConfig, LoadState, LoggingConfig, Network, NetworkConfig,
};
pub use domain::ports::ConfigSource;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::http::HttpConfigSource;
