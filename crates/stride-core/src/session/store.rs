use super::id::{SessionId, SessionIdSource, UuidSessionIdSource};
use super::transcript::{Transcript, TurnEntry};
use crate::error::{Result, StrideError};
use crate::resolver::ResponseResolver;
use rand::Rng;
use std::sync::{Arc, Mutex};

/// Text of the greeting every fresh or cleared chat starts with.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// A store shared between request handlers serving the same user session.
///
/// Store operations read and then write the active id, so concurrent callers
/// must go through the mutex.
pub type SharedSessionStore = Arc<Mutex<SessionStore>>;

/// Display data for one session, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLabel {
    pub id: SessionId,
    /// 1-based position in creation order.
    pub number: usize,
    /// "Chat #<number>"
    pub label: String,
    pub is_active: bool,
}

/// Manages the chat sessions of a single user.
///
/// `SessionStore` is responsible for:
/// - Creating new sessions, each starting with a greeting
/// - Switching the active session
/// - Appending exchanges to the active transcript
/// - Clearing one or all sessions
///
/// A new store holds nothing. The first access creates the first session
/// (an explicit `create_session` counts as that first session), and from then
/// on the store is never empty and `active` always names a stored session.
pub struct SessionStore {
    /// Sessions in creation order
    sessions: Vec<(SessionId, Transcript)>,
    /// Currently active session ID, `None` only before first use
    active: Option<SessionId>,
    id_source: Box<dyn SessionIdSource>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.sessions)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Creates an unseeded store backed by random v4 session ids.
    pub fn new() -> Self {
        Self::with_id_source(UuidSessionIdSource)
    }

    /// Creates an unseeded store drawing session ids from `id_source`.
    pub fn with_id_source(id_source: impl SessionIdSource + 'static) -> Self {
        Self {
            sessions: Vec::new(),
            active: None,
            id_source: Box::new(id_source),
        }
    }

    /// Creates a new greeting-only session and makes it active.
    pub fn create_session(&mut self) -> SessionId {
        let id = self.id_source.next_id();
        self.sessions.push((id, Transcript::with_greeting(GREETING)));
        self.active = Some(id);
        tracing::info!(session_id = %id, total = self.sessions.len(), "Created session");
        id
    }

    /// Makes `id` the active session.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::NotFound` if no session has that id. The active
    /// session is left unchanged.
    pub fn switch_active(&mut self, id: SessionId) -> Result<()> {
        self.ensure_seeded();
        if self.position(id).is_none() {
            tracing::warn!(session_id = %id, "Cannot switch to unknown session");
            return Err(StrideError::not_found("session", id.to_string()));
        }
        self.active = Some(id);
        tracing::debug!(session_id = %id, "Switched active session");
        Ok(())
    }

    /// Session ids in creation order.
    pub fn list_sessions(&mut self) -> Vec<SessionId> {
        self.ensure_seeded();
        self.sessions.iter().map(|(id, _)| *id).collect()
    }

    /// Numbered labels ("Chat #1", "Chat #2", ...) in creation order.
    pub fn session_labels(&mut self) -> Vec<SessionLabel> {
        let active = self.ensure_seeded();
        self.sessions
            .iter()
            .enumerate()
            .map(|(i, (id, _))| SessionLabel {
                id: *id,
                number: i + 1,
                label: format!("Chat #{}", i + 1),
                is_active: *id == active,
            })
            .collect()
    }

    /// Removes every session, then creates a fresh active one.
    pub fn clear_all(&mut self) -> SessionId {
        let removed = self.sessions.len();
        self.sessions.clear();
        self.active = None;
        tracing::info!(removed, "Cleared all sessions");
        self.create_session()
    }

    /// Resets the active transcript to the greeting alone.
    pub fn clear_current(&mut self) {
        let (active, transcript) = self.active_entry_mut();
        *transcript = Transcript::with_greeting(GREETING);
        tracing::debug!(session_id = %active, "Cleared current session");
    }

    /// Appends a question/answer pair to the active transcript.
    pub fn append_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let (_, transcript) = self.active_entry_mut();
        transcript.push(TurnEntry::exchange(question, answer));
    }

    /// Resolves `question` and records the exchange. Returns the answer.
    pub fn ask<R: Rng>(&mut self, resolver: &mut ResponseResolver<R>, question: &str) -> String {
        let answer = resolver.resolve(question);
        self.append_exchange(question, answer.clone());
        answer
    }

    pub fn active_id(&mut self) -> SessionId {
        self.ensure_seeded()
    }

    pub fn active_transcript(&mut self) -> &Transcript {
        let (_, transcript) = self.active_entry_mut();
        transcript
    }

    /// Looks up any stored session's transcript without seeding.
    pub fn transcript(&self, id: SessionId) -> Option<&Transcript> {
        self.position(id).map(|i| &self.sessions[i].1)
    }

    /// Number of stored sessions; zero only before first use.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Creates the first session if the store has never been used.
    fn ensure_seeded(&mut self) -> SessionId {
        match self.active {
            Some(id) => id,
            None => {
                let id = self.create_session();
                tracing::debug!(session_id = %id, "Seeded session store on first use");
                id
            }
        }
    }

    fn position(&self, id: SessionId) -> Option<usize> {
        self.sessions.iter().position(|(sid, _)| *sid == id)
    }

    fn active_entry_mut(&mut self) -> (SessionId, &mut Transcript) {
        let active = self.ensure_seeded();
        // Every mutation keeps `active` pointing at a stored session.
        let index = self
            .position(active)
            .unwrap_or_else(|| unreachable!("active session {} missing from store", active));
        (active, &mut self.sessions[index].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// Hands out predictable ids: 00000000-...-0001, -0002, ...
    struct SequentialIds(u128);

    impl SessionIdSource for SequentialIds {
        fn next_id(&mut self) -> SessionId {
            self.0 += 1;
            SessionId::from_uuid(Uuid::from_u128(self.0))
        }
    }

    fn greeting_only() -> Transcript {
        Transcript::with_greeting(GREETING)
    }

    #[test]
    fn test_new_store_is_seeded_on_first_access() {
        let mut store = SessionStore::new();
        assert!(store.is_empty());

        let active = store.active_id();

        assert_eq!(store.len(), 1);
        assert_eq!(store.list_sessions(), vec![active]);
        assert_eq!(store.active_transcript(), &greeting_only());
    }

    #[test]
    fn test_first_create_session_is_the_seed() {
        let mut store = SessionStore::with_id_source(SequentialIds(0));

        let a = store.create_session();
        let b = store.create_session();

        assert_eq!(store.list_sessions(), vec![a, b]);
        assert_eq!(store.active_id(), b);
    }

    #[test]
    fn test_mutations_seed_an_unused_store() {
        let mut appended = SessionStore::new();
        appended.append_exchange("q", "a");
        assert_eq!(appended.len(), 1);
        assert_eq!(appended.active_transcript().len(), 2);

        let mut cleared = SessionStore::new();
        cleared.clear_current();
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared.active_transcript(), &greeting_only());

        let mut switched = SessionStore::new();
        assert!(switched.switch_active(SessionId::new_v4()).is_err());
        assert_eq!(switched.len(), 1);
    }

    #[test]
    fn test_create_session_becomes_active() {
        let mut store = SessionStore::new();
        store.append_exchange("q", "a");

        let id = store.create_session();

        assert_eq!(store.active_id(), id);
        assert_eq!(store.active_transcript(), &greeting_only());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_sessions_keeps_creation_order() {
        let mut store = SessionStore::with_id_source(SequentialIds(0));
        let seed = store.active_id();

        let a = store.create_session();
        let b = store.create_session();

        assert_ne!(a, b);
        assert_eq!(store.list_sessions(), vec![seed, a, b]);
        assert_eq!(seed, SessionId::from_uuid(Uuid::from_u128(1)));
    }

    #[test]
    fn test_switch_active() {
        let mut store = SessionStore::new();
        let a = store.create_session();
        let b = store.create_session();
        assert_eq!(store.active_id(), b);

        store.switch_active(a).unwrap();

        assert_eq!(store.active_id(), a);
    }

    #[test]
    fn test_switch_to_unknown_session_is_not_found() {
        let mut store = SessionStore::new();
        let before = store.active_id();

        let err = store.switch_active(SessionId::new_v4()).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.active_id(), before);
    }

    #[test]
    fn test_append_exchange_targets_active_session() {
        let mut store = SessionStore::new();
        let first = store.active_id();
        let second = store.create_session();

        store.append_exchange("how?", "like this");

        assert_eq!(store.transcript(second).unwrap().len(), 2);
        assert_eq!(store.transcript(first).unwrap(), &greeting_only());
        assert_eq!(
            store.active_transcript().last(),
            Some(&TurnEntry::exchange("how?", "like this"))
        );
    }

    #[test]
    fn test_clear_current_is_idempotent_and_local() {
        let mut store = SessionStore::new();
        let first = store.active_id();
        store.append_exchange("q1", "a1");
        let second = store.create_session();
        store.append_exchange("q2", "a2");

        store.clear_current();
        let once = store.active_transcript().clone();
        store.clear_current();

        assert_eq!(once, greeting_only());
        assert_eq!(store.active_transcript(), &once);
        assert_eq!(store.active_id(), second);
        assert_eq!(store.transcript(first).unwrap().len(), 2);
    }

    #[test]
    fn test_clear_all_leaves_single_active_session() {
        let mut store = SessionStore::new();
        store.create_session();
        store.create_session();
        let old = store.list_sessions();

        let fresh = store.clear_all();

        assert_eq!(store.list_sessions(), vec![fresh]);
        assert_eq!(store.active_id(), fresh);
        assert!(!old.contains(&fresh));
        assert_eq!(store.active_transcript(), &greeting_only());
    }

    #[test]
    fn test_session_labels() {
        let mut store = SessionStore::with_id_source(SequentialIds(0));
        let seed = store.active_id();
        store.create_session();
        store.switch_active(seed).unwrap();

        let labels = store.session_labels();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label, "Chat #1");
        assert!(labels[0].is_active);
        assert_eq!(labels[1].label, "Chat #2");
        assert_eq!(labels[1].number, 2);
        assert!(!labels[1].is_active);
    }

    #[test]
    fn test_shared_store_behind_mutex() {
        let shared: SharedSessionStore = Arc::new(Mutex::new(SessionStore::new()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    let mut store = shared.lock().unwrap();
                    store.append_exchange(format!("q{i}"), "a");
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.lock().unwrap().active_transcript().len(), 5);
    }
}
