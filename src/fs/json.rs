//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{OpsboardError, Result};
use crate::schemas::Config;

use super::paths::get_config_path;

/// Read and deserialize a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// The deserialized value
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the expected shape
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OpsboardError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            OpsboardError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        OpsboardError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Pretty-print `data` to `path`, replacing any previous file in one rename.
///
/// Parent directories are created. The temp file is removed if serializing fails.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut writer = BufWriter::new(fs::File::create(&temp_path)?);
    if let Err(e) = serde_json::to_writer_pretty(&mut writer, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(OpsboardError::InvalidJson(e.to_string()));
    }
    writer.write_all(b"\n")?;
    let file = writer
        .into_inner()
        .map_err(|e| OpsboardError::Io(e.into_error()))?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Read the config.json file under `root`.
///
/// # Returns
/// The parsed Config, or default if file doesn't exist
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Write the config.json file under `root`.
pub fn write_config(root: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(root), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::KanbanStage;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<Vec<KanbanStage>> = read_json(&path);
        assert!(matches!(result.unwrap_err(), OpsboardError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<Vec<KanbanStage>> = read_json(&path);
        assert!(matches!(result.unwrap_err(), OpsboardError::InvalidJson(_)));
    }

    #[test]
    fn test_read_json_wrong_shape() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stages.json");
        fs::write(&path, r#"[{"title": "No id or name"}]"#).unwrap();

        let result: Result<Vec<KanbanStage>> = read_json(&path);
        assert!(matches!(result.unwrap_err(), OpsboardError::InvalidJson(_)));
    }

    #[test]
    fn test_write_and_read_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("stages.json");
        let stages = vec![KanbanStage::new("st-1", "in_review")];

        write_json(&path, &stages).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let read: Vec<KanbanStage> = read_json(&path).unwrap();
        assert_eq!(read, stages);
    }

    #[test]
    fn test_read_config_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = read_config(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_write_then_read_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.other_projects_label = "Unassigned".to_string();

        write_config(temp.path(), &config).unwrap();
        let read = read_config(temp.path()).unwrap();
        assert_eq!(read.other_projects_label, "Unassigned");
    }
}
