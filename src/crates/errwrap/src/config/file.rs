//! Configuration file loading

use crate::{ErrwrapError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a YAML configuration file
pub fn load_yaml_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load a JSON configuration file
pub fn load_json_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a configuration file, picking the format from its extension
///
/// `.yaml` / `.yml` and `.json` are supported.
pub fn load_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            ErrwrapError::Config(format!("Unable to determine file extension for {:?}", path))
        })?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => load_yaml_config(path),
        "json" => load_json_config(path),
        other => Err(ErrwrapError::Config(format!(
            "Unsupported config file extension: {}",
            other
        ))),
    }
}
