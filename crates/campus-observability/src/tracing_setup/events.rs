//! Structured log events for verdicts, reloads and degradations.

use campus_core::models::RetrievalVerdict;

/// Log a finished retrieval.
pub fn verdict_produced(verdict: &RetrievalVerdict) {
    tracing::info!(
        event = "verdict_produced",
        use_local = verdict.use_local,
        source = ?verdict.source,
        intent = %verdict.intent.intent,
        confidence = verdict.intent.confidence,
        best = verdict.best_keyword().unwrap_or(""),
        matches = verdict.matches.len(),
        "verdict produced"
    );
}

/// Log a knowledge base swap.
pub fn knowledge_reloaded(source: &str, entries: usize, generation: u64) {
    tracing::info!(
        event = "knowledge_reloaded",
        source = %source,
        entries = entries,
        generation = generation,
        "knowledge reloaded"
    );
}

/// Log an embedding failure that left a query without vector signal.
pub fn embedding_degraded(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "embedding_degraded",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "embedding degraded"
    );
}
