use serde::{Deserialize, Serialize};

use super::defaults;

/// Lexical retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Minimum score (exclusive) for matches backed only by word overlap.
    pub overlap_threshold: u32,
    /// Minimum score (exclusive) for structural or synonym matches.
    pub structural_threshold: u32,
    /// Entries concatenated into the answer context.
    pub max_context_entries: usize,
    /// Vector hits requested from the fallback.
    pub vector_top_k: usize,
    /// Points for a query recognised as a variation of the keyword.
    pub variation_bonus: u32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            overlap_threshold: defaults::DEFAULT_OVERLAP_THRESHOLD,
            structural_threshold: defaults::DEFAULT_STRUCTURAL_THRESHOLD,
            max_context_entries: defaults::DEFAULT_MAX_CONTEXT_ENTRIES,
            vector_top_k: defaults::DEFAULT_VECTOR_TOP_K,
            variation_bonus: defaults::DEFAULT_VARIATION_BONUS,
        }
    }
}
