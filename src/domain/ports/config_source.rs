use async_trait::async_trait;

use crate::domain::errors::FetchError;
use crate::domain::models::NetworkConfig;

/// Source of network configuration documents.
///
/// Implementations resolve `location` (a URL or path) and decode the
/// document found there. Every failure is reported as a [`FetchError`]; the
/// provider turns it into an error string rather than propagating it.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Fetch and decode the configuration at `location`.
    async fn fetch(&self, location: &str) -> Result<NetworkConfig, FetchError>;
}
