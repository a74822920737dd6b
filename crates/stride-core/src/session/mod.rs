//! Session domain module.
//!
//! This module contains chat transcripts and the in-memory store that owns
//! them.
//!
//! # Module Structure
//!
//! - `id`: Session identifiers and their source (`SessionId`, `SessionIdSource`)
//! - `transcript`: Transcript entries and the share formatter (`TurnEntry`, `Transcript`)
//! - `store`: Session lifecycle management (`SessionStore`)
//!
//! # Usage
//!
//! ```
//! use stride_core::session::{SessionStore, TurnEntry};
//!
//! let mut store = SessionStore::new();
//! store.append_exchange("hi", "hello!");
//! assert_eq!(store.active_transcript().len(), 2);
//! assert_eq!(
//!     store.active_transcript().last(),
//!     Some(&TurnEntry::exchange("hi", "hello!"))
//! );
//! ```

mod id;
mod store;
mod transcript;

pub use id::{SessionId, SessionIdSource, UuidSessionIdSource};
pub use store::{GREETING, SessionLabel, SessionStore, SharedSessionStore};
pub use transcript::{Transcript, TurnEntry, format_transcript};
