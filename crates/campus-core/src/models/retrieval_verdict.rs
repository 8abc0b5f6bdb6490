use serde::{Deserialize, Serialize};

use super::{DegradationEvent, MatchExplanation};
use crate::intent::IntentResult;
use crate::knowledge::KnowledgeEntry;

/// Which stage produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictSource {
    /// Confident lexical match.
    Lexical,
    /// Cosine similarity over precomputed embeddings.
    Vector,
    /// No local evidence; defer to the generator.
    None,
}

/// The engine's sole public output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalVerdict {
    pub use_local: bool,
    pub best_entry: Option<KnowledgeEntry>,
    /// Text handed to the answer synthesizer. Empty when deferring.
    pub context_text: String,
    pub intent: IntentResult,
    pub source: VerdictSource,
    pub normalized_query: String,
    /// Ranked lexical matches, best first.
    #[serde(default)]
    pub matches: Vec<MatchExplanation>,
    #[serde(default)]
    pub degradations: Vec<DegradationEvent>,
}

impl RetrievalVerdict {
    /// Verdict that defers to the generative fallback.
    pub fn fallback(intent: IntentResult, normalized_query: String) -> Self {
        Self {
            use_local: false,
            best_entry: None,
            context_text: String::new(),
            intent,
            source: VerdictSource::None,
            normalized_query,
            matches: Vec::new(),
            degradations: Vec::new(),
        }
    }

    /// Best entry's keyword, when a lexical match was found.
    pub fn best_keyword(&self) -> Option<&str> {
        self.best_entry.as_ref().map(|e| e.keyword.as_str())
    }
}
