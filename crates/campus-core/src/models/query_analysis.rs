use serde::{Deserialize, Serialize};

use crate::intent::IntentResult;

/// Per-request analysis of a raw query. Discarded after the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    pub normalized_text: String,
    pub tokens: Vec<String>,
    pub intent: IntentResult,
    pub confidence: f64,
    pub should_use_fallback: bool,
    pub reason: String,
}

impl QueryAnalysis {
    pub fn new(normalized_text: String, tokens: Vec<String>, intent: IntentResult) -> Self {
        Self {
            normalized_text,
            tokens,
            confidence: intent.confidence,
            should_use_fallback: intent.should_use_fallback,
            reason: intent.reason.clone(),
            intent,
        }
    }
}
