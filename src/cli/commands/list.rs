//! `netconfig list`

use anyhow::{anyhow, Result};
use std::process::ExitCode;

use crate::application::use_config;
use crate::cli::output::{output, NetworkListOutput};

pub fn execute(json: bool) -> Result<ExitCode> {
    let ctx = use_config()?;
    if let Some(error) = ctx.error {
        return Err(anyhow!(error));
    }

    let networks = ctx
        .config
        .map(|config| config.networks().to_vec())
        .unwrap_or_default();
    output(&NetworkListOutput { networks }, json);

    Ok(ExitCode::SUCCESS)
}
