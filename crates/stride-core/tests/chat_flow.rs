use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::sync::Arc;
use stride_core::{
    FALLBACK_RESPONSE, GREETING, JsonStrCatalogSource, ResponseResolver, SessionStore, TurnEntry,
    build_index, format_transcript, load_catalog, resolve,
};

const HI_CATALOG: &str = r#"{"intents": [{"questions": ["hi"], "responses": ["hello!", "hey there"]}]}"#;

#[test]
fn test_single_intent_catalog_end_to_end() {
    let catalog =
        load_catalog(&JsonStrCatalogSource::new(HI_CATALOG)).expect("catalog should load");
    let index = build_index(&catalog);

    let answers: HashSet<&str> = (0..200).map(|_| resolve(&index, "hi")).collect();
    assert!(answers.iter().all(|a| ["hello!", "hey there"].contains(a)));
    assert_eq!(answers.len(), 2, "both responses should show up over 200 draws");

    assert_eq!(resolve(&index, "bye"), FALLBACK_RESPONSE);
}

#[test]
fn test_session_lifecycle_end_to_end() {
    let mut store = SessionStore::new();

    let a = store.create_session();
    assert_eq!(store.active_id(), a);
    let b = store.create_session();
    assert_ne!(a, b);
    assert_eq!(store.active_id(), b);

    assert_eq!(store.list_sessions(), vec![a, b]);

    store.switch_active(a).expect("a exists");
    assert_eq!(store.active_id(), a);

    store.clear_all();
    let listed = store.list_sessions();
    assert_eq!(listed, vec![store.active_id()]);
}

#[test]
fn test_first_access_seeds_greeting_session() {
    let mut store = SessionStore::new();

    let transcript = store.active_transcript().clone();

    assert_eq!(transcript.entries(), &[TurnEntry::greeting(GREETING)]);
    assert_eq!(store.list_sessions().len(), 1);
}

#[test]
fn test_ask_and_share() {
    let catalog = load_catalog(&JsonStrCatalogSource::new(HI_CATALOG)).unwrap();
    let index = Arc::new(build_index(&catalog));
    let mut resolver = ResponseResolver::with_rng(index, StdRng::seed_from_u64(11));
    let mut store = SessionStore::new();

    let answer = store.ask(&mut resolver, "hi");
    store.ask(&mut resolver, "what?");

    let transcript = store.active_transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript.entries()[1], TurnEntry::exchange("hi", answer.clone()));
    assert_eq!(
        format_transcript(transcript),
        format!("{GREETING}\n\nQ: hi\nA: {answer}\n\nQ: what?\nA: {FALLBACK_RESPONSE}\n\n")
    );
}
