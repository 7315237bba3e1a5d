//! Shared helpers for command handlers.

use std::io::IsTerminal;

use ifsort_core::{Discovery, DiscoveryConfig, SystemIntrospector};

use crate::error::CliError;

/// Run discovery against the real system tools.
pub fn discover_system(config: &DiscoveryConfig) -> Result<Discovery, CliError> {
    let introspector = SystemIntrospector::new(config.lister.clone(), config.probe.clone());
    tracing::debug!(pattern = %config.name_pattern, lister = %config.lister.program, "starting discovery");
    Ok(ifsort_core::discover(&introspector, config)?)
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal there is nobody to ask, so the action is refused.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
