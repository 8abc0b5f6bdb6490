//! Cosine similarity search over entry embeddings, with a time-boxed
//! query embedding call.

use std::cmp::Ordering;
use std::sync::Arc;

use campus_core::config::EmbeddingConfig;
use campus_core::errors::{CampusError, CampusResult, EmbeddingError, RetrievalError};
use campus_core::knowledge::KnowledgeEntry;
use campus_core::models::DegradationEvent;
use campus_core::traits::IEmbeddingProvider;
use tracing::{debug, info_span, warn, Instrument};

/// One entry ranked by cosine similarity.
#[derive(Debug, Clone)]
pub struct VectorHit<'a> {
    pub entry: &'a KnowledgeEntry,
    /// Position of the entry in the knowledge base.
    pub index: usize,
    /// Cosine similarity in [-1.0, 1.0].
    pub similarity: f64,
    /// 1-based rank in the result set.
    pub rank: usize,
}

/// Hits plus any degradation recorded while producing them.
#[derive(Debug, Default)]
pub struct VectorOutcome<'a> {
    pub hits: Vec<VectorHit<'a>>,
    pub degradation: Option<DegradationEvent>,
}

/// `dot(a, b) / (|a| * |b|)`. `None` for mismatched lengths, empty vectors,
/// or a zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some(dot / denom)
}

/// Rank embedded entries against `query_embedding`, dropping hits at or
/// below `min_similarity`. Ties keep knowledge-base order.
pub fn rank_by_similarity<'a>(
    query_embedding: &[f32],
    entries: &'a [KnowledgeEntry],
    top_k: usize,
    min_similarity: f64,
) -> Vec<VectorHit<'a>> {
    if query_embedding.is_empty() || top_k == 0 {
        return Vec::new();
    }

    let mut hits: Vec<VectorHit<'a>> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let embedding = entry.embedding.as_deref()?;
            let similarity = cosine_similarity(query_embedding, embedding)?;
            (similarity > min_similarity).then_some(VectorHit {
                entry,
                index,
                similarity,
                rank: 0,
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    hits.truncate(top_k);
    for (i, hit) in hits.iter_mut().enumerate() {
        hit.rank = i + 1;
    }
    hits
}

/// Query-time half of the vector fallback: embeds the query under a
/// timeout and ranks the knowledge base by similarity.
pub struct VectorFallback {
    provider: Option<Arc<dyn IEmbeddingProvider>>,
    config: EmbeddingConfig,
}

impl VectorFallback {
    pub fn new(config: EmbeddingConfig) -> Self {
        Self {
            provider: None,
            config,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn IEmbeddingProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    /// Whether the fallback can run at all against `entries`.
    pub fn is_applicable(&self, entries: &[KnowledgeEntry]) -> bool {
        self.config.enabled
            && self.has_provider()
            && entries.iter().any(|e| e.embedding.is_some())
    }

    /// Embed `query` with the provider, bounded by the configured timeout.
    ///
    /// The provider runs on the blocking pool; on timeout the call is
    /// abandoned and its eventual result discarded.
    pub async fn embed_query(&self, query: &str) -> CampusResult<Vec<f32>> {
        let provider = self
            .provider
            .clone()
            .ok_or(RetrievalError::NoEmbeddingProvider)?;
        if !provider.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: provider.name().to_string(),
            }
            .into());
        }

        let span = info_span!(
            "campus.embedding",
            provider = %provider.name(),
            dimensions = provider.dimensions()
        );
        let text = query.to_string();
        let task = tokio::task::spawn_blocking(move || provider.embed(&text));
        match tokio::time::timeout(self.config.timeout(), task)
            .instrument(span)
            .await
        {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(EmbeddingError::InferenceFailed {
                reason: join_err.to_string(),
            }
            .into()),
            Err(_) => Err(EmbeddingError::Timeout {
                timeout_ms: self.config.timeout_ms,
            }
            .into()),
        }
    }

    /// Embed and rank, surfacing failures.
    pub async fn try_search<'a>(
        &self,
        query: &str,
        entries: &'a [KnowledgeEntry],
        top_k: usize,
    ) -> CampusResult<Vec<VectorHit<'a>>> {
        if !entries.iter().any(|e| e.embedding.is_some()) {
            return Err(RetrievalError::NoEmbeddedEntries.into());
        }
        let query_embedding = self.embed_query(query).await?;
        Ok(rank_by_similarity(
            &query_embedding,
            entries,
            top_k,
            self.config.min_similarity,
        ))
    }

    /// Embed and rank. Never fails: any error becomes an empty result with
    /// a degradation event.
    pub async fn search<'a>(
        &self,
        query: &str,
        entries: &'a [KnowledgeEntry],
        top_k: usize,
    ) -> VectorOutcome<'a> {
        match self.try_search(query, entries, top_k).await {
            Ok(hits) => {
                debug!(hits = hits.len(), "vector fallback ranked entries");
                VectorOutcome {
                    hits,
                    degradation: None,
                }
            }
            Err(e) => {
                let provider = self
                    .provider
                    .as_ref()
                    .map(|p| p.name().to_string())
                    .unwrap_or_else(|| "none".to_string());
                warn!(provider = %provider, error = %e, "vector fallback degraded to no signal");
                VectorOutcome {
                    hits: Vec::new(),
                    degradation: Some(degradation_for(&provider, &e)),
                }
            }
        }
    }
}

fn degradation_for(provider: &str, error: &CampusError) -> DegradationEvent {
    DegradationEvent::now(
        format!("vector_fallback:{provider}"),
        error.to_string(),
        "no_vector_signal",
    )
}
