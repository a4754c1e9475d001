//! Format-agnostic loading of configuration files

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result, io};

/// Load a configuration file, choosing the parser from its extension.
///
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    // Reject before touching the disk so a typo'd extension fails fast.
    let format = match extension.as_str() {
        "toml" => "TOML",
        "json" => "JSON",
        "yaml" | "yml" => "YAML",
        _ => return Err(Error::UnsupportedFormat { extension }),
    };

    let content = io::read_text(path)?;
    let parse_error = |message: String| Error::ConfigParse {
        path: path.to_path_buf(),
        format: format.into(),
        message,
    };

    match format {
        "TOML" => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        "JSON" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        _ => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string())),
    }
}
