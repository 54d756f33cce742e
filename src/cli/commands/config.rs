//! Config commands - show the resolved configuration, write the defaults

use std::path::Path;

use tracing::info;

use crate::errors::{OpsboardError, Result};
use crate::fs::{get_config_path, resolve_cwd, write_config};
use crate::schemas::Config;

use super::print_json;

pub fn show(config: &Config) -> Result<()> {
    print_json(config)
}

/// Write the default config under the working directory
pub fn init(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let path = get_config_path(&root);
    if path.exists() && !force {
        return Err(OpsboardError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    write_config(&root, &Config::default())?;
    info!(path = %path.display(), "wrote default config");
    Ok(())
}
