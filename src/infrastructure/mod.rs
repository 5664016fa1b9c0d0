//! Infrastructure layer: adapters for HTTP, configuration and logging.

pub mod config;
pub mod http;
pub mod logging;
