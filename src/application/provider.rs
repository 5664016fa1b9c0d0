//! Configuration provider
//!
//! Owns the load state for one configuration location and keeps it current:
//! every mount or location change starts a fetch, and the fetch's outcome
//! settles the state to ready or failed. Consumers read the state through
//! [`ConfigHandle`]s or, inside [`ConfigProvider::scope`], through
//! [`use_config`](super::context::use_config).

use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::context::{ConfigHandle, CURRENT_CONFIG};
use crate::domain::models::{ConfigContext, LoadState, UNKNOWN_ERROR};
use crate::domain::ports::ConfigSource;

/// State slot shared between the provider, its fetch task and its handles.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    /// Fetch number; only the fetch holding the current generation may settle the slot
    pub(crate) generation: u64,
    pub(crate) location: String,
    pub(crate) state: LoadState,
}

/// Provider of network configuration state.
///
/// Dropping the provider cancels any in-flight fetch and closes its handles.
pub struct ConfigProvider {
    source: Arc<dyn ConfigSource>,
    state: Arc<watch::Sender<Slot>>,
    task: Option<JoinHandle<()>>,
}

impl ConfigProvider {
    /// Mount a provider for `location` and start fetching it.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn mount(source: Arc<dyn ConfigSource>, location: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(Slot {
            generation: 0,
            location: location.into(),
            state: LoadState::Loading,
        });

        let mut provider = Self {
            source,
            state: Arc::new(tx),
            task: None,
        };
        provider.start_fetch(None);
        provider
    }

    /// Point the provider at a new location.
    ///
    /// A different location resets the state to loading and starts a new
    /// fetch, cancelling the previous one. The same location is a no-op.
    pub fn set_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        if self.state.borrow().location == location {
            return;
        }
        self.start_fetch(Some(location));
    }

    /// Fetch the current location again.
    pub fn reload(&mut self) {
        self.start_fetch(None);
    }

    pub fn location(&self) -> String {
        self.state.borrow().location.clone()
    }

    /// Snapshot of the current state.
    pub fn context(&self) -> ConfigContext {
        ConfigContext::from(&self.state.borrow().state)
    }

    /// Icon for `network_name` in the currently loaded configuration.
    pub fn get_network_icon(&self, network_name: &str) -> Option<String> {
        self.state
            .borrow()
            .state
            .config()
            .and_then(|config| config.icon_for(network_name))
            .map(str::to_string)
    }

    /// A handle that observes this provider's state.
    pub fn subscribe(&self) -> ConfigHandle {
        ConfigHandle::new(self.state.subscribe())
    }

    /// Run `fut` with this provider installed, so that
    /// [`use_config`](super::context::use_config) resolves to it.
    pub fn scope<F: Future>(&self, fut: F) -> impl Future<Output = F::Output> {
        CURRENT_CONFIG.scope(self.subscribe(), fut)
    }

    fn start_fetch(&mut self, location: Option<String>) {
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let mut generation = 0;
        let mut current = String::new();
        self.state.send_modify(|slot| {
            slot.generation += 1;
            if let Some(location) = location {
                slot.location = location;
            }
            slot.state = LoadState::Loading;
            generation = slot.generation;
            current.clone_from(&slot.location);
        });

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        self.task = Some(tokio::spawn(async move {
            let next = load(source.as_ref(), &current).await;
            state.send_if_modified(|slot| {
                if slot.generation != generation {
                    debug!(
                        location = %current,
                        generation,
                        current_generation = slot.generation,
                        "discarding stale config fetch"
                    );
                    return false;
                }
                slot.state = next;
                true
            });
        }));
    }
}

impl Drop for ConfigProvider {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Run one fetch to completion and convert its outcome into a settled state.
async fn load(source: &dyn ConfigSource, location: &str) -> LoadState {
    debug!(location, "fetching network config");

    match AssertUnwindSafe(source.fetch(location)).catch_unwind().await {
        Ok(Ok(config)) => {
            info!(location, networks = config.len(), "network config loaded");
            LoadState::Ready(config)
        }
        Ok(Err(err)) => {
            warn!(location, error = %err, "failed to load network config");
            LoadState::failed(err.to_string())
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(location, error = %message, "config source panicked");
            LoadState::failed(message)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNKNOWN_ERROR.to_string()
    }
}
