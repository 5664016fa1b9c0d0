//! `netconfig status`

use anyhow::Result;
use std::process::ExitCode;

use crate::application::{use_config, use_config_handle};
use crate::cli::output::{output, StatusOutput};

/// Print the provider state; a failed load still renders, with a failing exit code.
pub fn execute(json: bool) -> Result<ExitCode> {
    let context = use_config()?;
    let failed = context.error.is_some();
    let source = use_config_handle()?.location();

    output(&StatusOutput { source, context }, json);

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
