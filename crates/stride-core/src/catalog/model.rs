//! Immutable catalog types.

use std::sync::Arc;

/// A group of equivalent canonical questions sharing one response pool.
///
/// Both lists are guaranteed nonempty once the record sits in a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRecord {
    tag: Option<String>,
    questions: Vec<String>,
    responses: Vec<String>,
}

impl IntentRecord {
    pub(crate) fn new(tag: Option<String>, questions: Vec<String>, responses: Vec<String>) -> Self {
        Self {
            tag,
            questions,
            responses,
        }
    }

    /// Optional label carried over from the source, used in diagnostics only.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Canonical questions in source order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Candidate responses in source order.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }
}

/// The full, load-once set of intents.
///
/// There is no mutation API. Records are reference-counted so a
/// [`QuestionIndex`](crate::index::QuestionIndex) can point at them without
/// copying the response pools.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    intents: Vec<Arc<IntentRecord>>,
}

impl Catalog {
    pub(crate) fn from_records(records: Vec<IntentRecord>) -> Self {
        Self {
            intents: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// Intents in source order.
    pub fn intents(&self) -> &[Arc<IntentRecord>] {
        &self.intents
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Total number of question entries, duplicates included.
    pub fn question_count(&self) -> usize {
        self.intents.iter().map(|i| i.questions.len()).sum()
    }
}
