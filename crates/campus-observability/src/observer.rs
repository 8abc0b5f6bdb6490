//! [`RetrievalObserver`]: owns verdict metrics and the degradation tracker.

use campus_core::errors::CampusResult;
use campus_core::models::RetrievalVerdict;
use serde::Serialize;

use crate::degradation::DegradationTracker;
use crate::metrics::VerdictMetrics;
use crate::tracing_setup::events;

#[derive(Debug, Default)]
pub struct RetrievalObserver {
    pub metrics: VerdictMetrics,
    pub degradation: DegradationTracker,
    pub reloads: u64,
}

#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    metrics: &'a VerdictMetrics,
    local_rate: f64,
    active_degradations: usize,
    reloads: u64,
}

impl RetrievalObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log, count and track one verdict.
    pub fn observe_verdict(&mut self, verdict: &RetrievalVerdict) {
        events::verdict_produced(verdict);
        self.metrics.record(verdict);
        for event in &verdict.degradations {
            self.degradation.record(event.clone());
        }
    }

    /// Mark a component healthy again, e.g. once its provider answers.
    pub fn mark_recovered(&mut self, component: &str) {
        self.degradation.mark_recovered(component);
    }

    pub fn observe_reload(&mut self, source: &str, entries: usize, generation: u64) {
        self.reloads += 1;
        events::knowledge_reloaded(source, entries, generation);
    }

    /// Current counters as JSON.
    pub fn metrics_snapshot(&self) -> CampusResult<serde_json::Value> {
        let snapshot = Snapshot {
            metrics: &self.metrics,
            local_rate: self.metrics.local_rate(),
            active_degradations: self.degradation.active_degradations().len(),
            reloads: self.reloads,
        };
        Ok(serde_json::to_value(snapshot)?)
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}
