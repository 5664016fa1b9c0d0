//! CLI command implementations.
//!
//! Every command mounts a [`ConfigProvider`], waits for it to settle and then
//! renders inside the provider's scope, reading state through [`use_config`].
//!
//! [`use_config`]: crate::application::use_config

pub mod icon;
pub mod list;
pub mod status;

use anyhow::Result;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

use crate::application::{use_config_handle, ConfigProvider};
use crate::cli::types::Commands;
use crate::domain::ports::ConfigSource;

/// Mount a provider for `location` and run `command` against its settled state.
pub async fn execute(
    source: Arc<dyn ConfigSource>,
    location: String,
    command: Commands,
    json: bool,
) -> Result<ExitCode> {
    let provider = ConfigProvider::mount(source, location);
    provider.scope(render(command, json)).await
}

async fn render(command: Commands, json: bool) -> Result<ExitCode> {
    let ctx = use_config_handle()?.settled().await?;
    debug!(loading = ctx.loading, failed = ctx.error.is_some(), "provider settled");

    match command {
        Commands::Icon { name } => icon::execute(&name, json),
        Commands::List => list::execute(json),
        Commands::Status => status::execute(json),
    }
}
