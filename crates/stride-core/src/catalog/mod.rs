//! Intent catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: Immutable catalog types (`Catalog`, `IntentRecord`)
//! - `source`: Source trait and the JSON document parser (`CatalogSource`)

mod model;
mod source;

pub use model::{Catalog, IntentRecord};
pub use source::{CatalogSource, JsonStrCatalogSource, load_catalog, parse_catalog};
