//! File-backed catalog source.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use stride_core::catalog::{Catalog, CatalogSource, load_catalog, parse_catalog};
use stride_core::error::{LoadError, Result};
use stride_core::index::{QuestionIndex, build_index};

/// Reads an intent document from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalogSource {
    fn load(&self) -> std::result::Result<Catalog, LoadError> {
        tracing::debug!("Reading catalog from {:?}", self.path);

        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::Missing {
                path: self.path.clone(),
            },
            _ => LoadError::io(format!("{:?}: {}", self.path, e)),
        })?;

        parse_catalog(&content)
    }
}

/// Loads the catalog at `path` and builds its question index.
///
/// # Errors
///
/// `StrideError::Load` when the file is missing, unreadable, or invalid.
pub fn load_question_index(path: &Path) -> Result<QuestionIndex> {
    let catalog = load_catalog(&JsonFileCatalogSource::new(path))?;
    Ok(build_index(&catalog))
}
