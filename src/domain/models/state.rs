use serde::Serialize;

use super::network::NetworkConfig;

/// Message used when a failure carries no description of its own.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Load state of a configuration provider.
///
/// `Loading` only while a fetch is in flight. Once settled exactly one of
/// config or error is present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(NetworkConfig),
    Failed(String),
}

impl LoadState {
    /// Build a failed state, substituting [`UNKNOWN_ERROR`] for a blank message.
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Failed(UNKNOWN_ERROR.to_string())
        } else {
            Self::Failed(message)
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub const fn config(&self) -> Option<&NetworkConfig> {
        match self {
            Self::Ready(config) => Some(config),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Snapshot of what a provider exposes to its consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigContext {
    pub config: Option<NetworkConfig>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ConfigContext {
    /// Icon for `network_name`, or `None` if nothing is loaded or no network matches.
    pub fn get_network_icon(&self, network_name: &str) -> Option<&str> {
        self.config.as_ref()?.icon_for(network_name)
    }
}

impl From<&LoadState> for ConfigContext {
    fn from(state: &LoadState) -> Self {
        Self {
            config: state.config().cloned(),
            loading: state.is_loading(),
            error: state.error().map(str::to_string),
        }
    }
}

impl From<LoadState> for ConfigContext {
    fn from(state: LoadState) -> Self {
        match state {
            LoadState::Loading => Self {
                config: None,
                loading: true,
                error: None,
            },
            LoadState::Ready(config) => Self {
                config: Some(config),
                loading: false,
                error: None,
            },
            LoadState::Failed(message) => Self {
                config: None,
                loading: false,
                error: Some(message),
            },
        }
    }
}
