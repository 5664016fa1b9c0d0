//! `netconfig icon <NAME>`

use anyhow::{anyhow, Result};
use std::process::ExitCode;

use crate::application::use_config;
use crate::cli::output::{output, IconOutput};

/// Print the icon of `name`; exits with failure when no network matches.
pub fn execute(name: &str, json: bool) -> Result<ExitCode> {
    let ctx = use_config()?;
    if let Some(error) = ctx.error.as_deref() {
        return Err(anyhow!("{error}"));
    }

    let icon = ctx.get_network_icon(name).map(str::to_string);
    let found = icon.is_some();
    output(
        &IconOutput {
            network: name.to_string(),
            icon,
        },
        json,
    );

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
