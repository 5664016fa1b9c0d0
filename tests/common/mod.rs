//! Common test utilities for integration tests
//!
//! Provides shared fixtures and fake configuration sources used across
//! multiple integration test files.
#![allow(dead_code)]

use async_trait::async_trait;
use netconfig::{ConfigSource, FetchError, Network, NetworkConfig};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;

/// Body served by the two-network fixture.
pub const SAMPLE_BODY: &str =
    r#"[{"name":"Ethereum","icon":"eth.svg"},{"name":"Polygon","icon":"poly.svg"}]"#;

pub fn sample_config() -> NetworkConfig {
    NetworkConfig::new(vec![
        Network::new("Ethereum", "eth.svg"),
        Network::new("Polygon", "poly.svg"),
    ])
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

type Reply = Result<NetworkConfig, FetchError>;

/// Config source whose fetches block until the test releases them.
///
/// Each location must be armed with [`GatedSource::arm`] before the provider
/// fetches it; the returned sender completes that fetch.
#[derive(Default)]
pub struct GatedSource {
    pending: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
}

impl GatedSource {
    pub fn arm(&self, location: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending
            .lock()
            .unwrap()
            .insert(location.to_string(), rx);
        tx
    }
}

#[async_trait]
impl ConfigSource for GatedSource {
    async fn fetch(&self, location: &str) -> Result<NetworkConfig, FetchError> {
        let rx = self
            .pending
            .lock()
            .unwrap()
            .remove(location)
            .unwrap_or_else(|| panic!("location {location} was not armed"));
        rx.await.unwrap_or_else(|_| {
            Err(FetchError::Transport {
                location: location.to_string(),
                message: "gate dropped".to_string(),
            })
        })
    }
}
