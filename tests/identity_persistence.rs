//! Identity persistence tests.
//!
//! These tests verify the durable side of identity resolution:
//! - identifiers survive a save/reload cycle
//! - entries are append-only across runs
//! - a lost map re-mints the same identifiers, a seeded map wins over
//!   the minting scheme

use portretgraaf::{
    CanonicalKey, Corpus, IdentityMap, IdentityStore, MemorySink, Pipeline, PipelineConfig,
};

use tempfile::tempdir;

fn test_config() -> PipelineConfig {
    PipelineConfig {
        person_namespace: "https://example.org/person/".to_string(),
        artwork_namespace: "https://example.org/artwork/".to_string(),
        profile_catalog_prefix: "https://catalog.example/profile/".to_string(),
    }
}

fn corpus_with_subject(title: &str) -> Corpus {
    Corpus::from_json(&format!(
        r#"{{"portraits": {{"https://example.org/p/x": {{"title": "{title}"}}}}}}"#
    ))
    .unwrap()
}

/// Resolving a previously-seen name after a save/reload cycle returns
/// the identifier from before the save.
#[test]
fn test_round_trip_preserves_identifier() {
    let dir = tempdir().unwrap();
    let store = IdentityStore::new(dir.path().join("persons.json"));

    let first_id = {
        let pipeline = Pipeline::new(test_config(), store.clone()).unwrap();
        let mut sink = MemorySink::new();
        pipeline
            .run(&corpus_with_subject("Jan de Baen"), &mut sink)
            .unwrap();
        sink.persons()[0].id.clone()
    };

    // Second run, fresh pipeline, same store: the identifier must come
    // back from disk unchanged.
    let second_id = {
        let pipeline = Pipeline::new(test_config(), store.clone()).unwrap();
        let mut sink = MemorySink::new();
        pipeline
            .run(&corpus_with_subject("Jan de Baen"), &mut sink)
            .unwrap();
        sink.persons()[0].id.clone()
    };

    assert_eq!(first_id, second_id);
    assert_eq!(store.load().len(), 1);
}

/// Existing entries survive runs that add new names.
#[test]
fn test_map_grows_append_only_across_runs() {
    let dir = tempdir().unwrap();
    let store = IdentityStore::new(dir.path().join("persons.json"));

    {
        let pipeline = Pipeline::new(test_config(), store.clone()).unwrap();
        let mut sink = MemorySink::new();
        pipeline
            .run(&corpus_with_subject("Jan de Baen"), &mut sink)
            .unwrap();
    }
    {
        let pipeline = Pipeline::new(test_config(), store.clone()).unwrap();
        let mut sink = MemorySink::new();
        pipeline
            .run(&corpus_with_subject("Anna Maria van Schurman"), &mut sink)
            .unwrap();
    }

    let map = store.load();
    assert_eq!(map.len(), 2);
    assert_eq!(
        map.get(&CanonicalKey::from_display("Jan de Baen")),
        Some("https://example.org/person/jan-de-baen")
    );
}

/// A deleted map re-mints identical identifiers, because stable IDs are
/// a pure function of key and namespace.
#[test]
fn test_map_loss_reminted_identically() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("persons.json");
    let store = IdentityStore::new(&path);

    let first_id = {
        let pipeline = Pipeline::new(test_config(), store.clone()).unwrap();
        let mut sink = MemorySink::new();
        pipeline
            .run(&corpus_with_subject("Jan de Baen"), &mut sink)
            .unwrap();
        sink.persons()[0].id.clone()
    };

    std::fs::remove_file(&path).unwrap();

    let reminted_id = {
        let pipeline = Pipeline::new(test_config(), store).unwrap();
        let mut sink = MemorySink::new();
        pipeline
            .run(&corpus_with_subject("Jan de Baen"), &mut sink)
            .unwrap();
        sink.persons()[0].id.clone()
    };

    assert_eq!(first_id, reminted_id);
}

/// An identifier seeded from a foreign naming scheme is returned as-is
/// and never overwritten by the minting scheme.
#[test]
fn test_seeded_identifier_wins_over_minting() {
    let dir = tempdir().unwrap();
    let store = IdentityStore::new(dir.path().join("persons.json"));

    let mut seeded = IdentityMap::new();
    seeded.insert_new(
        CanonicalKey::from_display("Jan de Baen"),
        "https://legacy.example/people/42",
    );
    store.save(&seeded).unwrap();

    let pipeline = Pipeline::new(test_config(), store.clone()).unwrap();
    let mut sink = MemorySink::new();
    pipeline
        .run(&corpus_with_subject("Jan de Baen"), &mut sink)
        .unwrap();

    assert_eq!(
        sink.persons()[0].id.as_uri(),
        Some("https://legacy.example/people/42")
    );
    assert_eq!(
        store.load().get(&CanonicalKey::from_display("Jan de Baen")),
        Some("https://legacy.example/people/42")
    );
}

/// A corrupt map file degrades to an empty map instead of failing the
/// run.
#[test]
fn test_corrupt_map_starts_fresh() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("persons.json");
    std::fs::write(&path, b"][ not json").unwrap();

    let store = IdentityStore::new(&path);
    let pipeline = Pipeline::new(test_config(), store.clone()).unwrap();
    let mut sink = MemorySink::new();
    let report = pipeline
        .run(&corpus_with_subject("Jan de Baen"), &mut sink)
        .unwrap();

    assert_eq!(report.records, 1);
    assert_eq!(store.load().len(), 1);
}
