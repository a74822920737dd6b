//! Question index derived from a loaded catalog.
//!
//! The index is the ordered list of every canonical question (the picker
//! contents) plus a reverse lookup from question to its intent.

use crate::catalog::{Catalog, IntentRecord};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Read-only question list and question→intent lookup.
#[derive(Debug, Clone, Default)]
pub struct QuestionIndex {
    questions: Vec<String>,
    by_question: HashMap<String, Arc<IntentRecord>>,
    duplicates: Vec<String>,
}

impl QuestionIndex {
    /// All questions in catalog order. Duplicated strings appear once per occurrence.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn contains(&self, question: &str) -> bool {
        self.by_question.contains_key(question)
    }

    /// The intent owning `question`, if any.
    ///
    /// When a question string occurs in several intents, the last one in
    /// catalog order wins.
    pub fn intent_for(&self, question: &str) -> Option<&Arc<IntentRecord>> {
        self.by_question.get(question)
    }

    /// Question strings that occur in more than one intent, in first-seen order.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

/// Builds the question index for `catalog`.
///
/// Order is outer intent order, then question order within each intent.
pub fn build_index(catalog: &Catalog) -> QuestionIndex {
    let mut questions = Vec::with_capacity(catalog.question_count());
    let mut by_question = HashMap::with_capacity(catalog.question_count());
    let mut duplicates = Vec::new();
    let mut reported = HashSet::new();

    for intent in catalog.intents() {
        for question in intent.questions() {
            questions.push(question.clone());
            let previous = by_question.insert(question.clone(), Arc::clone(intent));
            if let Some(previous) = previous {
                if !Arc::ptr_eq(&previous, intent) && reported.insert(question.clone()) {
                    tracing::warn!(
                        question = %question,
                        "Question appears in more than one intent; the later intent answers it"
                    );
                    duplicates.push(question.clone());
                }
            }
        }
    }

    tracing::debug!(questions = questions.len(), "Question index built");

    QuestionIndex {
        questions,
        by_question,
        duplicates,
    }
}
