pub mod config;
pub mod json_catalog_source;
pub mod paths;

pub use crate::config::AppConfig;
pub use crate::json_catalog_source::{JsonFileCatalogSource, load_question_index};
pub use crate::paths::StridePaths;
