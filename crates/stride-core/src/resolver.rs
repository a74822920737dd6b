//! Response resolution: question in, one canned response out.

use crate::index::QuestionIndex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Returned for any question the index does not know.
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I didn't understand that.";

/// Picks a response for `question` using the supplied random source.
///
/// Each call draws independently and uniformly from the owning intent's
/// responses; repeats are allowed. Unknown questions get
/// [`FALLBACK_RESPONSE`]. This never fails.
pub fn resolve_with<'a, R>(index: &'a QuestionIndex, question: &str, rng: &mut R) -> &'a str
where
    R: Rng + ?Sized,
{
    let Some(intent) = index.intent_for(question) else {
        tracing::debug!(question = %question, "No intent for question, using fallback");
        return FALLBACK_RESPONSE;
    };

    match intent.responses().choose(rng) {
        Some(response) => response,
        None => FALLBACK_RESPONSE,
    }
}

/// Picks a response for `question` using the thread-local random source.
pub fn resolve<'a>(index: &'a QuestionIndex, question: &str) -> &'a str {
    resolve_with(index, question, &mut rand::thread_rng())
}

/// A resolver bound to an index and an owned random source.
///
/// Hosts construct one per user session; tests inject a seeded generator
/// through [`ResponseResolver::with_rng`].
pub struct ResponseResolver<R = StdRng> {
    index: Arc<QuestionIndex>,
    rng: R,
}

impl ResponseResolver<StdRng> {
    /// Creates a resolver seeded from operating system entropy.
    pub fn new(index: Arc<QuestionIndex>) -> Self {
        Self::with_rng(index, StdRng::from_entropy())
    }
}

impl<R: Rng> ResponseResolver<R> {
    pub fn with_rng(index: Arc<QuestionIndex>, rng: R) -> Self {
        Self { index, rng }
    }

    pub fn index(&self) -> &Arc<QuestionIndex> {
        &self.index
    }

    pub fn resolve(&mut self, question: &str) -> String {
        resolve_with(&self.index, question, &mut self.rng).to_string()
    }
}
