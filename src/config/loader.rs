//! Configuration loading with defaults

use std::path::Path;

use tracing::debug;

use crate::errors::{OpsboardError, Result};
use crate::fs;
use crate::schemas::Config;

/// Load configuration, falling back to defaults.
///
/// An explicit `config_path` must exist. Without one, `.opsboard/config.json`
/// under `root` is used when present, and the built-in defaults otherwise.
/// Missing keys in a file take their default values.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => fs::read_json(path).map_err(|e| match e {
            OpsboardError::FileNotFound(msg) => OpsboardError::ConfigError(msg),
            other => other,
        })?,
        None => fs::read_config(root)?,
    };
    validate_config(&config)?;
    debug!(
        privileged_roles = ?config.privileged_roles,
        transitions = config.allowed_transitions.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Reject configurations that would make the transition rules contradictory
pub fn validate_config(config: &Config) -> Result<()> {
    for terminal in &config.terminal_stages {
        if config.allowed_transitions.contains_key(terminal) {
            return Err(OpsboardError::ConfigError(format!(
                "terminal stage {} cannot have outgoing transitions",
                terminal
            )));
        }
    }
    for (from, targets) in &config.allowed_transitions {
        if targets.contains(from) {
            return Err(OpsboardError::ConfigError(format!(
                "stage {} lists itself as a transition target",
                from
            )));
        }
    }
    Ok(())
}
