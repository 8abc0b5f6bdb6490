use serde::{Deserialize, Serialize};

use super::IntentKind;
use crate::constants::UNKNOWN_INTENT;

/// Score accumulated by one domain intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentScore {
    pub intent: String,
    pub score: u32,
}

/// Outcome of intent classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    pub intent: String,
    pub kind: IntentKind,
    /// In [0.0, 1.0].
    pub confidence: f64,
    pub should_use_fallback: bool,
    pub reason: String,
    /// Categories declared by the winning domain intent.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Domain intents with a non-zero score, best first.
    #[serde(default)]
    pub ranked: Vec<IntentScore>,
}

impl IntentResult {
    pub fn unknown(reason: impl Into<String>) -> Self {
        Self {
            intent: UNKNOWN_INTENT.to_string(),
            kind: IntentKind::Unknown,
            confidence: 0.0,
            should_use_fallback: true,
            reason: reason.into(),
            categories: Vec::new(),
            ranked: Vec::new(),
        }
    }

    pub fn is_domain(&self) -> bool {
        self.kind == IntentKind::Domain
    }

    /// Whether `category` is among the winning intent's categories.
    pub fn covers_category(&self, category: &str) -> bool {
        self.is_domain()
            && self
                .categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(category))
    }
}
