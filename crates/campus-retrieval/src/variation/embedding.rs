//! Embedding-based variation matcher.
//!
//! Embeds both sides with the provider and compares them by cosine
//! similarity. Calls the provider synchronously; provider errors count as
//! "not a variation".

use std::sync::Arc;

use campus_core::config::defaults::DEFAULT_VARIATION_SIMILARITY;
use campus_core::config::EmbeddingConfig;
use campus_core::constants::MAX_VARIATION_SCORE;
use campus_core::traits::{IEmbeddingProvider, IVariationStrategy};
use tracing::warn;

use crate::normalize::normalize_text;
use crate::search::cosine_similarity;

pub struct EmbeddingVariation {
    provider: Arc<dyn IEmbeddingProvider>,
    threshold: f64,
}

impl EmbeddingVariation {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>) -> Self {
        Self {
            provider,
            threshold: DEFAULT_VARIATION_SIMILARITY,
        }
    }

    /// Threshold taken from `[embedding] variation_similarity`.
    pub fn from_config(provider: Arc<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        Self::new(provider).with_threshold(config.variation_similarity)
    }

    /// Similarity at or above which two texts are variations.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn similarity(&self, query: &str, keyword: &str) -> Option<f64> {
        if !self.provider.is_available() {
            return None;
        }
        let embed = |text: &str| match self.provider.embed(text) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "variation embedding failed");
                None
            }
        };
        let q = embed(query)?;
        let k = embed(keyword)?;
        cosine_similarity(&q, &k)
    }
}

impl IVariationStrategy for EmbeddingVariation {
    fn is_variation_of(&self, query: &str, keyword: &str) -> bool {
        let (q, k) = (normalize_text(query), normalize_text(keyword));
        if q.is_empty() || k.is_empty() {
            return false;
        }
        if q == k {
            return true;
        }
        self.similarity(&q, &k)
            .is_some_and(|sim| sim >= self.threshold)
    }

    fn variation_score(&self, query: &str, keyword: &str) -> u32 {
        if query.trim().eq_ignore_ascii_case(keyword.trim()) {
            return MAX_VARIATION_SCORE;
        }
        let (q, k) = (normalize_text(query), normalize_text(keyword));
        if !q.is_empty() && q == k {
            return MAX_VARIATION_SCORE;
        }
        match self.similarity(&q, &k) {
            Some(sim) => (sim * 100.0).round().clamp(0.0, f64::from(MAX_VARIATION_SCORE)) as u32,
            None => 0,
        }
    }

    fn name(&self) -> &str {
        "embedding"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::errors::{CampusResult, EmbeddingError};

    /// Maps a handful of words onto fixed axes.
    struct AxisProvider;

    impl IEmbeddingProvider for AxisProvider {
        fn embed(&self, text: &str) -> CampusResult<Vec<f32>> {
            let mut v = vec![0.0_f32; 3];
            for word in text.split_whitespace() {
                match word {
                    "library" | "books" => v[0] += 1.0,
                    "fees" | "tuition" => v[1] += 1.0,
                    "fail" => {
                        return Err(EmbeddingError::InferenceFailed {
                            reason: "forced".into(),
                        }
                        .into())
                    }
                    _ => v[2] += 0.1,
                }
            }
            Ok(v)
        }
        fn dimensions(&self) -> usize {
            3
        }
        fn name(&self) -> &str {
            "axis"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    fn strategy() -> EmbeddingVariation {
        EmbeddingVariation::new(Arc::new(AxisProvider))
    }

    #[test]
    fn identical_text_scores_full() {
        assert_eq!(strategy().variation_score("library hours", "library hours"), 100);
        assert!(strategy().is_variation_of("Library Hours", "library hours"));
    }

    #[test]
    fn close_vectors_are_variations() {
        let s = strategy();
        assert!(s.is_variation_of("library books", "library"));
        assert!(!s.is_variation_of("tuition", "library"));
        assert_eq!(s.variation_score("tuition", "library"), 0);
    }

    #[test]
    fn provider_errors_mean_no_variation() {
        let s = strategy();
        assert!(!s.is_variation_of("fail", "library"));
        assert_eq!(s.variation_score("fail", "library"), 0);
    }

    #[test]
    fn config_threshold_is_applied() {
        // cos("library hours", "library") is about 0.995.
        let config = EmbeddingConfig {
            variation_similarity: 0.999,
            ..EmbeddingConfig::default()
        };
        let strict = EmbeddingVariation::from_config(Arc::new(AxisProvider), &config);
        assert!(!strict.is_variation_of("library hours", "library"));
        let default = EmbeddingVariation::from_config(Arc::new(AxisProvider), &EmbeddingConfig::default());
        assert!(default.is_variation_of("library hours", "library"));
    }

    #[test]
    fn threshold_is_configurable() {
        let s = strategy().with_threshold(0.999);
        assert!(!s.is_variation_of("library hours", "library"));
    }
}
