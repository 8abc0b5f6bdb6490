//! Golden routing scenarios loaded from the shared fixtures.

use serde::Deserialize;

use campus_core::config::CampusConfig;
use campus_core::knowledge::KnowledgeEntry;
use campus_core::models::VerdictSource;
use campus_retrieval::RetrievalEngine;
use test_fixtures::load_fixture;

#[derive(Debug, Deserialize)]
struct GoldenQuery {
    query: String,
    use_local: bool,
    intent: String,
    best: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoldenFile {
    queries: Vec<GoldenQuery>,
}

fn knowledge_base() -> Vec<KnowledgeEntry> {
    load_fixture("knowledge/university.json")
}

#[test]
fn golden_routing_matches_expectations() {
    let engine = RetrievalEngine::from_config(&CampusConfig::default()).unwrap();
    let kb = knowledge_base();
    let golden: GoldenFile = load_fixture("golden/routing.json");

    let mut failures = Vec::new();
    for case in &golden.queries {
        let v = engine.retrieve_with_embedding(&case.query, &kb, None);
        let best = v.best_keyword().map(str::to_string);
        if v.use_local != case.use_local || v.intent.intent != case.intent || best != case.best {
            failures.push(format!(
                "{:?}: got use_local={} intent={} best={:?}, expected use_local={} intent={} best={:?}",
                case.query, v.use_local, v.intent.intent, best, case.use_local, case.intent, case.best
            ));
        }
    }
    assert!(failures.is_empty(), "golden mismatches:\n{}", failures.join("\n"));
}

#[test]
fn local_verdicts_carry_lexical_context() {
    let engine = RetrievalEngine::from_config(&CampusConfig::default()).unwrap();
    let kb = knowledge_base();
    let v = engine.retrieve_with_embedding("what are the admission requirements?", &kb, None);
    assert_eq!(v.source, VerdictSource::Lexical);
    assert!(v
        .context_text
        .starts_with("admission requirements: Applicants need a UCE and UACE certificate"));
    assert!(!v.matches.is_empty());
    assert_eq!(v.matches[0].rank, 1);
}

#[test]
fn fixture_entries_are_all_valid() {
    for entry in knowledge_base() {
        assert!(entry.is_valid(), "{}", entry.keyword);
    }
}
