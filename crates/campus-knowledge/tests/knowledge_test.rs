//! Knowledge loading, merging, chunking and publishing against the shared
//! fixture files.

use std::sync::Arc;
use std::thread;

use campus_core::knowledge::{KnowledgeEntry, KnowledgeSource};
use campus_core::traits::IKnowledgeSource;
use campus_core::CampusError;
use campus_knowledge::loader::{parse_database_records, parse_static_records};
use campus_knowledge::{
    chunk_text, expand_entry, ingest_document, merge_sources, JsonFileSource, KnowledgeStore,
    MergedSource,
};
use test_fixtures::{fixture_path, load_fixture, load_fixture_text};

#[test]
fn static_records_keep_only_valid_entries() {
    let json = load_fixture_text("knowledge/static_records.json");
    let entries = parse_static_records(&json).unwrap();
    let keywords: Vec<&str> = entries.iter().map(|e| e.keyword.as_str()).collect();
    assert_eq!(
        keywords,
        vec!["library hours", "How do I apply?", "Chapel services", "tags and priority"]
    );
    assert!(entries.iter().all(|e| e.source == KnowledgeSource::StaticFile));
    assert_eq!(entries[3].priority, Some(3));
    assert!(entries[3].tags.contains("misc"));
    assert_eq!(
        entries[2].answer,
        "Vespers on Friday evening and worship on Saturday morning."
    );
}

#[test]
fn database_records_default_priority_and_source() {
    let json = load_fixture_text("knowledge/database_records.json");
    let entries = parse_database_records(&json).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].priority, Some(80));
    assert_eq!(entries[1].keyword, "graduation date");
    assert_eq!(entries[1].priority, Some(50));
    assert!(entries.iter().all(|e| e.source == KnowledgeSource::Database));
}

#[test]
fn merge_puts_static_entries_first() {
    let statics = parse_static_records(&load_fixture_text("knowledge/static_records.json")).unwrap();
    let database =
        parse_database_records(&load_fixture_text("knowledge/database_records.json")).unwrap();
    let merged = merge_sources(statics, database);
    assert_eq!(merged.len(), 6);
    assert_eq!(merged[0].source, KnowledgeSource::StaticFile);
    assert_eq!(merged[5].source, KnowledgeSource::Database);
}

#[test]
fn json_file_source_reads_fixture() {
    let source = JsonFileSource::database_export(fixture_path("knowledge/database_records.json"));
    let entries = source.load_entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].keyword, "tuition fees");
}

#[test]
fn json_file_source_reports_missing_file() {
    let source = JsonFileSource::static_file(fixture_path("knowledge/does_not_exist.json"));
    let err = source.load_entries().unwrap_err();
    assert!(matches!(err, CampusError::KnowledgeError(_)));
}

#[test]
fn merged_source_skips_a_failing_member() {
    let merged = MergedSource::new()
        .with_source(JsonFileSource::static_file(fixture_path("knowledge/static_records.json")))
        .with_source(JsonFileSource::database_export(fixture_path("knowledge/missing.json")));
    let entries = merged.load_entries().unwrap();
    assert_eq!(entries.len(), 4);
}

#[test]
fn merged_source_fails_when_every_member_fails() {
    let merged = MergedSource::new()
        .with_source(JsonFileSource::static_file(fixture_path("knowledge/missing_a.json")))
        .with_source(JsonFileSource::static_file(fixture_path("knowledge/missing_b.json")));
    assert!(merged.load_entries().is_err());
}

#[test]
fn university_fixture_is_all_valid() {
    let entries: Vec<KnowledgeEntry> = load_fixture("knowledge/university.json");
    let store = KnowledgeStore::new(entries.clone());
    assert_eq!(store.len(), entries.len());
}

#[test]
fn handbook_chunks_cover_the_whole_document() {
    let text = load_fixture_text("documents/student_handbook.txt");
    let chunks = chunk_text(&text, 800, 200);
    assert!(chunks.len() >= 2);
    assert!(chunks.iter().all(|c| c.chars().count() <= 800));
    assert!(text.starts_with(chunks[0].as_str()));
    assert!(text.ends_with(chunks.last().unwrap().as_str()));

    let entries = ingest_document("Student Handbook", &text, 800, 200);
    assert_eq!(entries[0].keyword, "Student Handbook (part 1)");
    assert_eq!(entries[0].chunk_text(), entries[0].answer);
}

#[test]
fn enrichment_applies_to_fixture_entries() {
    let entries: Vec<KnowledgeEntry> = load_fixture("knowledge/university.json");
    let fees = entries
        .into_iter()
        .find(|e| e.keyword == "tuition fees")
        .unwrap();
    let expanded = expand_entry(fees);
    assert!(expanded.synonyms.iter().any(|s| s == "tuition payment"));
}

#[test]
fn readers_see_whole_snapshots_while_publishing() {
    let store = Arc::new(KnowledgeStore::new(vec![KnowledgeEntry::new("a", "1")]));

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for n in 2..=50 {
                let batch: Vec<KnowledgeEntry> = (0..n)
                    .map(|i| KnowledgeEntry::new(format!("k{i}"), format!("batch {n}")))
                    .collect();
                store.publish(batch);
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = store.snapshot();
                    let first = &snapshot[0].answer;
                    assert!(snapshot.iter().all(|e| &e.answer == first));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(store.len(), 50);
    assert_eq!(store.generation(), 49);
}
