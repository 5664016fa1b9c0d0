//! Consumer-side access to provider state.

use tokio::sync::watch;

use super::provider::Slot;
use crate::domain::errors::ContextError;
use crate::domain::models::ConfigContext;

tokio::task_local! {
    pub(crate) static CURRENT_CONFIG: ConfigHandle;
}

/// Read-only view of a [`ConfigProvider`](super::provider::ConfigProvider)'s state.
///
/// Handles are cheap to clone and may outlive the provider; once it is
/// dropped, waiting methods return [`ContextError::ProviderDropped`].
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    rx: watch::Receiver<Slot>,
}

impl ConfigHandle {
    pub(crate) const fn new(rx: watch::Receiver<Slot>) -> Self {
        Self { rx }
    }

    /// Snapshot of the current state.
    pub fn context(&self) -> ConfigContext {
        ConfigContext::from(&self.rx.borrow().state)
    }

    pub fn location(&self) -> String {
        self.rx.borrow().location.clone()
    }

    pub fn get_network_icon(&self, network_name: &str) -> Option<String> {
        self.rx
            .borrow()
            .state
            .config()
            .and_then(|config| config.icon_for(network_name))
            .map(str::to_string)
    }

    /// Wait for the next state change and return the new state.
    pub async fn changed(&mut self) -> Result<ConfigContext, ContextError> {
        self.rx
            .changed()
            .await
            .map_err(|_| ContextError::ProviderDropped)?;
        Ok(ConfigContext::from(&self.rx.borrow_and_update().state))
    }

    /// Wait until no fetch is in flight and return the settled state.
    ///
    /// Returns immediately when the current state is already settled.
    pub async fn settled(&mut self) -> Result<ConfigContext, ContextError> {
        let slot = self
            .rx
            .wait_for(|slot| slot.state.is_settled())
            .await
            .map_err(|_| ContextError::ProviderDropped)?;
        Ok(ConfigContext::from(&slot.state))
    }
}

/// Read the current provider state from inside [`ConfigProvider::scope`].
///
/// Calling this anywhere else is a usage error and returns
/// [`ContextError::OutsideProvider`].
///
/// [`ConfigProvider::scope`]: super::provider::ConfigProvider::scope
pub fn use_config() -> Result<ConfigContext, ContextError> {
    CURRENT_CONFIG
        .try_with(ConfigHandle::context)
        .map_err(|_| ContextError::OutsideProvider)
}

/// Clone the handle of the enclosing provider scope.
pub fn use_config_handle() -> Result<ConfigHandle, ContextError> {
    CURRENT_CONFIG
        .try_with(ConfigHandle::clone)
        .map_err(|_| ContextError::OutsideProvider)
}
