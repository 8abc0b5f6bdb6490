//! Spans opened by the retrieval engine, captured with a recording layer.

use std::sync::{Arc, Mutex};

use campus_core::config::CampusConfig;
use campus_core::errors::{CampusResult, EmbeddingError};
use campus_core::knowledge::KnowledgeEntry;
use campus_core::traits::IEmbeddingProvider;
use campus_retrieval::RetrievalEngine;
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
struct SpanNames(Arc<Mutex<Vec<String>>>);

impl SpanNames {
    fn names(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for SpanNames {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(attrs.metadata().name().to_string());
    }
}

struct UnloadedProvider;

impl IEmbeddingProvider for UnloadedProvider {
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
        "unloaded"
    }
    fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn lexical_retrieval_opens_a_retrieval_span() {
    let names = SpanNames::default();
    let subscriber = tracing_subscriber::registry().with(names.clone());
    let engine = RetrievalEngine::from_config(&CampusConfig::default()).unwrap();
    let kb = vec![KnowledgeEntry::new("tuition fees", "UGX 1,200,000")];

    tracing::subscriber::with_default(subscriber, || {
        engine.retrieve_with_embedding("tuition fees", &kb, None);
    });

    let names = names.names();
    assert!(names.iter().any(|n| n == "campus.retrieval"));
    assert!(!names.iter().any(|n| n == "campus.embedding"));
}

#[tokio::test]
async fn vector_stage_opens_an_embedding_span() {
    let names = SpanNames::default();
    let subscriber = tracing_subscriber::registry().with(names.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let engine = RetrievalEngine::from_config(&CampusConfig::default())
        .unwrap()
        .with_embedding_provider(Arc::new(UnloadedProvider));
    let kb = vec![KnowledgeEntry::new("hostel accommodation", "Rooms are allocated each semester.")
        .with_embedding(vec![1.0, 0.0])];

    let verdict = engine.retrieve("when is the graduation ceremony", &kb).await;
    assert!(!verdict.use_local);

    let names = names.names();
    assert!(names.iter().any(|n| n == "campus.retrieval"));
    assert!(names.iter().any(|n| n == "campus.embedding"));
}
