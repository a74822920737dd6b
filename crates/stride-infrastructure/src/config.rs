//! Application configuration (`config.toml`).

use crate::paths::StridePaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use stride_core::error::StrideError;

/// Settings read from `config.toml`. Every field is optional.
///
/// ```toml
/// catalog_path = "/srv/stride/stride.json"
/// log_level = "debug"
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Location of the intent catalog JSON file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Loads the config from the default location.
    ///
    /// A missing config directory, missing file, or empty file all give the
    /// default config.
    pub fn load_default() -> Result<Self, StrideError> {
        match StridePaths::config_file() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::debug!("No config directory, using defaults: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Loads the config from `path`.
    ///
    /// # Errors
    ///
    /// `StrideError::Config` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, StrideError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            StrideError::config(format!("Failed to read config file at {:?}: {}", path, e))
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&content).map_err(|e| {
            StrideError::config(format!("Failed to parse TOML from {:?}: {}", path, e))
        })
    }

    /// Picks the catalog path: explicit override, then config, then `stride.json`.
    pub fn resolve_catalog_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.catalog_path.clone())
            .unwrap_or_else(StridePaths::default_catalog)
    }
}
