//! File system utilities for opsboard
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, write_config, write_json};
pub use paths::{get_config_path, get_opsboard_dir, resolve_cwd};
