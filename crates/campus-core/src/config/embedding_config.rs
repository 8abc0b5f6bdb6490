use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Vector fallback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Whether the vector fallback runs at all.
    pub enabled: bool,
    /// Budget for a single query embedding call.
    pub timeout_ms: u64,
    /// Hits at or below this cosine similarity are discarded.
    pub min_similarity: f64,
    /// Similarity at which the embedding variation strategy reports a variant.
    pub variation_similarity: f64,
}

impl EmbeddingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_EMBEDDING_ENABLED,
            timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
            min_similarity: defaults::DEFAULT_MIN_SIMILARITY,
            variation_similarity: defaults::DEFAULT_VARIATION_SIMILARITY,
        }
    }
}
