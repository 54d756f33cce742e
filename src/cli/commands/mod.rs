//! CLI command implementations

pub mod calendar;
pub mod config;
pub mod field_type;
pub mod fields;
pub mod stages;

use std::path::Path;

use serde::Serialize;

use crate::config::load_config;
use crate::errors::{OpsboardError, Result};
use crate::fs::resolve_cwd;
use crate::schemas::Config;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| OpsboardError::wrap(e, "Failed to serialize output"))?;
    println!("{}", out);
    Ok(())
}

/// Config for the working directory, honoring an explicit `--config`
pub fn resolve_config(cwd: Option<&Path>, config_path: Option<&Path>) -> Result<Config> {
    let root = resolve_cwd(cwd);
    load_config(&root, config_path)
}
