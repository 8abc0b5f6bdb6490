//! Verdict outcome counts: local lexical, local vector, fallback by intent,
//! fallback with no local match, and embedding degradations.

use std::collections::BTreeMap;

use campus_core::models::{RetrievalVerdict, VerdictSource};
use serde::{Deserialize, Serialize};

/// Counters over every verdict recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerdictMetrics {
    pub total: u64,
    pub local_lexical: u64,
    pub local_vector: u64,
    /// Deferred because the intent was non-domain, unknown or empty.
    pub fallback_by_intent: u64,
    /// Deferred after a domain intent found no confident local answer.
    pub fallback_no_match: u64,
    /// Verdicts carrying at least one degradation event.
    pub degraded: u64,
    pub queries_by_intent: BTreeMap<String, u64>,
    pub fallbacks_by_intent: BTreeMap<String, u64>,
}

impl VerdictMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, verdict: &RetrievalVerdict) {
        self.total += 1;
        let intent = verdict.intent.intent.clone();

        match (verdict.use_local, verdict.source) {
            (true, VerdictSource::Vector) => self.local_vector += 1,
            (true, _) => self.local_lexical += 1,
            (false, _) => {
                if verdict.intent.should_use_fallback {
                    self.fallback_by_intent += 1;
                } else {
                    self.fallback_no_match += 1;
                }
                *self.fallbacks_by_intent.entry(intent.clone()).or_default() += 1;
            }
        }

        if !verdict.degradations.is_empty() {
            self.degraded += 1;
        }
        *self.queries_by_intent.entry(intent).or_default() += 1;
    }

    /// Share of verdicts answered locally, in [0.0, 1.0].
    pub fn local_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.local_lexical + self.local_vector) as f64 / self.total as f64
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
