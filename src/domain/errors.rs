//! Domain errors for configuration loading and access.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to fetch or decode a configuration document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch config from {location}: {message}")]
    Transport { location: String, message: String },

    #[error("Failed to load config file: {reason}")]
    Status { status: StatusCode, reason: String },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },
}

impl FetchError {
    /// Build a status error, using the canonical reason phrase when the
    /// status has one and the numeric code otherwise.
    pub fn from_status(status: StatusCode) -> Self {
        let reason = status
            .canonical_reason()
            .map_or_else(|| status.as_u16().to_string(), str::to_string);
        Self::Status { status, reason }
    }
}

/// Misuse of the provider context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("use_config must be called within a ConfigProvider scope")]
    OutsideProvider,

    #[error("ConfigProvider was dropped")]
    ProviderDropped,
}
