//! Observer wiring against real retrieval verdicts.

use std::sync::Arc;

use campus_core::config::CampusConfig;
use campus_core::errors::{CampusResult, EmbeddingError};
use campus_core::knowledge::KnowledgeEntry;
use campus_core::traits::IEmbeddingProvider;
use campus_knowledge::KnowledgeStore;
use campus_observability::RetrievalObserver;
use campus_retrieval::RetrievalEngine;
use serde::Deserialize;
use test_fixtures::load_fixture;

#[derive(Debug, Deserialize)]
struct GoldenQuery {
    query: String,
    use_local: bool,
}

#[derive(Debug, Deserialize)]
struct GoldenFile {
    queries: Vec<GoldenQuery>,
}

struct FailingProvider;

impl IEmbeddingProvider for FailingProvider {
    fn embed(&self, _text: &str) -> CampusResult<Vec<f32>> {
        Err(EmbeddingError::InferenceFailed {
            reason: "model not loaded".into(),
        }
        .into())
    }
    fn dimensions(&self) -> usize {
        2
    }
    fn name(&self) -> &str {
        "failing"
    }
    fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn golden_routing_feeds_metrics() {
    let engine = RetrievalEngine::from_config(&CampusConfig::default()).unwrap();
    let store = KnowledgeStore::new(load_fixture("knowledge/university.json"));
    let golden: GoldenFile = load_fixture("golden/routing.json");

    let mut observer = RetrievalObserver::new();
    observer.observe_reload("university.json", store.len(), store.generation());

    let snapshot = store.snapshot();
    for case in &golden.queries {
        let verdict = engine.retrieve_with_embedding(&case.query, &snapshot, None);
        observer.observe_verdict(&verdict);
    }

    let expected_local = golden.queries.iter().filter(|q| q.use_local).count() as u64;
    let m = &observer.metrics;
    assert_eq!(m.total, golden.queries.len() as u64);
    assert_eq!(m.local_lexical, expected_local);
    assert_eq!(m.local_vector, 0);
    assert_eq!(
        m.fallback_by_intent + m.fallback_no_match,
        m.total - expected_local
    );
    assert!(m.queries_by_intent.get("joke").copied().unwrap_or(0) > 0);
    assert_eq!(m.degraded, 0);

    let json = observer.metrics_snapshot().unwrap();
    assert_eq!(json["reloads"], 1);
    assert_eq!(json["metrics"]["total"], golden.queries.len() as u64);
}

#[tokio::test]
async fn failing_provider_is_tracked_as_degraded() {
    let engine = RetrievalEngine::from_config(&CampusConfig::default())
        .unwrap()
        .with_embedding_provider(Arc::new(FailingProvider));
    let kb = vec![KnowledgeEntry::new("hostel accommodation", "Rooms are allocated each semester.")
        .with_embedding(vec![1.0, 0.0])];

    let verdict = engine.retrieve("when is the graduation ceremony", &kb).await;
    assert!(!verdict.use_local);
    assert_eq!(verdict.degradations.len(), 1);

    let mut observer = RetrievalObserver::new();
    observer.observe_verdict(&verdict);
    assert_eq!(observer.metrics.degraded, 1);
    assert_eq!(observer.metrics.fallback_no_match, 1);

    let component = verdict.degradations[0].component.clone();
    assert_eq!(component, "vector_fallback:failing");
    assert!(observer.degradation.is_degraded(&component));

    observer.mark_recovered(&component);
    assert!(observer.degradation.active_degradations().is_empty());
}
