//! Path resolution for Stride Sync configuration files.
//!
//! ```text
//! ~/.config/stride-sync/     # Config directory (platform dependent)
//! └── config.toml            # Application configuration
//! ```

use std::path::PathBuf;
use stride_core::error::StrideError;

/// Name of the directory holding Stride Sync files under the platform config dir.
pub const APP_DIR_NAME: &str = "stride-sync";

/// Catalog file looked up in the working directory when nothing else is configured.
pub const DEFAULT_CATALOG_FILE: &str = "stride.json";

pub struct StridePaths;

impl StridePaths {
    /// Returns the Stride Sync configuration directory.
    ///
    /// # Errors
    ///
    /// `StrideError::Config` if the platform has no config directory
    /// (e.g. no home directory).
    pub fn config_dir() -> Result<PathBuf, StrideError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| StrideError::config("Cannot find config directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, StrideError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Default catalog location, relative to the working directory.
    pub fn default_catalog() -> PathBuf {
        PathBuf::from(DEFAULT_CATALOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_app_dir() {
        if let Ok(path) = StridePaths::config_file() {
            assert!(path.ends_with("stride-sync/config.toml"));
        }
    }

    #[test]
    fn test_default_catalog_is_relative() {
        assert_eq!(StridePaths::default_catalog(), PathBuf::from("stride.json"));
    }
}
