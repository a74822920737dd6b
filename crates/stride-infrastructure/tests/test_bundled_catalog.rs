use std::path::PathBuf;
use stride_core::catalog::load_catalog;
use stride_core::{GREETING, SessionStore, build_index};
use stride_infrastructure::JsonFileCatalogSource;

fn bundled_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/stride.json")
}

#[test]
fn test_bundled_catalog_is_valid() {
    let catalog = load_catalog(&JsonFileCatalogSource::new(bundled_catalog()))
        .expect("bundled catalog should load");
    let index = build_index(&catalog);

    assert_eq!(index.len(), catalog.question_count());
    assert!(index.duplicates().is_empty());
    for question in index.questions() {
        assert!(index.contains(question), "{question} missing from lookup");
    }
}

#[test]
fn test_bundled_catalog_answers_from_its_pool() {
    let catalog = load_catalog(&JsonFileCatalogSource::new(bundled_catalog())).unwrap();
    let index = std::sync::Arc::new(build_index(&catalog));
    let mut resolver = stride_core::ResponseResolver::new(std::sync::Arc::clone(&index));
    let mut store = SessionStore::new();

    let answer = store.ask(&mut resolver, "What is BMI?");

    let pool = index.intent_for("What is BMI?").unwrap().responses();
    assert!(pool.contains(&answer));
    assert_eq!(
        stride_core::format_transcript(store.active_transcript()),
        format!("{GREETING}\n\nQ: What is BMI?\nA: {answer}\n\n")
    );
}
