//! netconfig CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use netconfig::cli::{commands, handle_error, Cli};
use netconfig::infrastructure::config::ConfigLoader;
use netconfig::infrastructure::http::HttpConfigSource;
use netconfig::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            handle_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let log_config = LogConfig::try_from(&config.logging).map_err(anyhow::Error::msg)?;
    let _logger = LoggerImpl::init(&log_config)?;

    let location = cli
        .source
        .or(config.source)
        .context("No config source given; pass --source or set `source` in .netconfig/config.yaml")?;

    let source = HttpConfigSource::with_config(&config.http)?;
    commands::execute(Arc::new(source), location, cli.command, cli.json).await
}
