//! Catalog sources and the intent document parser.
//!
//! The document shape is a top-level object whose `intents` key holds an
//! array of `{ "questions": [..], "responses": [..] }` records. Older data
//! files name the question list `text`; both spellings are accepted.

use super::model::{Catalog, IntentRecord};
use crate::error::LoadError;
use serde::Deserialize;

/// Anything that can produce a fully validated [`Catalog`].
///
/// Loading is all-or-nothing: an implementation never returns a partial
/// catalog.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, LoadError>;
}

/// Loads a catalog from the given source.
pub fn load_catalog(source: &dyn CatalogSource) -> Result<Catalog, LoadError> {
    let catalog = source.load()?;
    tracing::info!(
        intents = catalog.len(),
        questions = catalog.question_count(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// A catalog source backed by an in-memory JSON document.
#[derive(Debug, Clone)]
pub struct JsonStrCatalogSource {
    json: String,
}

impl JsonStrCatalogSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl CatalogSource for JsonStrCatalogSource {
    fn load(&self) -> Result<Catalog, LoadError> {
        parse_catalog(&self.json)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    intents: Vec<IntentDocument>,
}

#[derive(Debug, Deserialize)]
struct IntentDocument {
    #[serde(default)]
    tag: Option<String>,
    #[serde(alias = "text")]
    questions: Vec<String>,
    responses: Vec<String>,
}

/// Parses and validates a JSON intent document.
pub fn parse_catalog(json: &str) -> Result<Catalog, LoadError> {
    let document: CatalogDocument = serde_json::from_str(json)?;

    let mut records = Vec::with_capacity(document.intents.len());
    for (position, intent) in document.intents.into_iter().enumerate() {
        if intent.questions.is_empty() {
            return Err(LoadError::EmptyQuestions {
                position,
                tag: intent.tag,
            });
        }
        if intent.responses.is_empty() {
            return Err(LoadError::EmptyResponses {
                position,
                tag: intent.tag,
            });
        }
        records.push(IntentRecord::new(
            intent.tag,
            intent.questions,
            intent.responses,
        ));
    }

    Ok(Catalog::from_records(records))
}
