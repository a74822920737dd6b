//! Core of the Stride Sync FAQ chatbot.
//!
//! A static intent catalog is flattened into a list of canonical questions;
//! a selected question is answered with a random response from its intent;
//! answers are kept in per-session transcripts owned by a [`SessionStore`].

pub mod catalog;
pub mod error;
pub mod index;
pub mod resolver;
pub mod session;

// Re-export common types
pub use catalog::{Catalog, CatalogSource, IntentRecord, JsonStrCatalogSource, load_catalog};
pub use error::{LoadError, StrideError};
pub use index::{QuestionIndex, build_index};
pub use resolver::{FALLBACK_RESPONSE, ResponseResolver, resolve, resolve_with};
pub use session::{
    GREETING, SessionId, SessionStore, SharedSessionStore, Transcript, TurnEntry,
    format_transcript,
};
