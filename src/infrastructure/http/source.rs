use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client, Url};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::domain::errors::FetchError;
use crate::domain::models::{HttpSourceConfig, NetworkConfig};
use crate::domain::ports::ConfigSource;

/// Configuration source backed by an HTTP(S) GET request.
///
/// Absolute `http`/`https` locations are requested as-is. Relative locations
/// such as `/config.json` are resolved against the configured base URL, the
/// same way a browser resolves a relative fetch path against the page origin.
#[derive(Debug, Clone)]
pub struct HttpConfigSource {
    /// Reusable HTTP client with connection pooling
    http_client: Client,

    /// Base for relative locations
    base_url: Option<Url>,
}

impl HttpConfigSource {
    /// Create a source with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpSourceConfig::default())
    }

    /// Create a source with custom configuration
    ///
    /// # Errors
    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn with_config(config: &HttpSourceConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .context("Invalid base URL for HTTP config source")?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Turn a location string into a fetchable URL.
    fn resolve(&self, location: &str) -> Result<Url, FetchError> {
        let invalid = |reason: String| FetchError::InvalidLocation {
            location: location.to_string(),
            reason,
        };

        let url = match (Url::parse(location), &self.base_url) {
            (Ok(url), _) => url,
            (Err(_), Some(base)) => base.join(location).map_err(|e| invalid(e.to_string()))?,
            (Err(e), None) => return Err(invalid(e.to_string())),
        };

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }
}

#[async_trait]
impl ConfigSource for HttpConfigSource {
    #[instrument(skip(self))]
    async fn fetch(&self, location: &str) -> Result<NetworkConfig, FetchError> {
        let url = self.resolve(location)?;
        debug!(%url, "requesting network config");

        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                location: location.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport {
                location: location.to_string(),
                message: e.to_string(),
            })?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with_base(base: Option<&str>) -> HttpConfigSource {
        HttpConfigSource::with_config(&HttpSourceConfig {
            base_url: base.map(str::to_string),
            ..Default::default()
        })
        .expect("client should build")
    }

    #[test]
    fn test_resolve_absolute_url() {
        let source = source_with_base(None);
        let url = source.resolve("https://example.com/networks.json").unwrap();
        assert_eq!(url.as_str(), "https://example.com/networks.json");
    }

    #[test]
    fn test_resolve_relative_against_base() {
        let source = source_with_base(Some("https://app.example.com/"));
        let url = source.resolve("/config/networks.json").unwrap();
        assert_eq!(url.as_str(), "https://app.example.com/config/networks.json");
    }

    #[test]
    fn test_relative_without_base_is_invalid() {
        let source = source_with_base(None);
        let err = source.resolve("/config.json").unwrap_err();
        assert!(matches!(err, FetchError::InvalidLocation { .. }));
    }

    #[test]
    fn test_non_http_scheme_is_invalid() {
        let source = source_with_base(None);
        let err = source.resolve("file:///etc/networks.json").unwrap_err();
        match err {
            FetchError::InvalidLocation { reason, .. } => assert!(reason.contains("file")),
            other => panic!("Expected InvalidLocation, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = HttpConfigSource::with_config(&HttpSourceConfig {
            base_url: Some("not a url".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
