//! RetrievalEngine: the local-first orchestrator.
//!
//! Stage 1: normalize and classify; conversational or unknown intents defer.
//! Stage 2: lexical scoring; a confident top match answers locally.
//! Stage 3: vector fallback over embedded entries; the top chunk answers.
//! Stage 4: defer to the generator with empty context.

use std::sync::Arc;

use campus_core::catalog::RuleCatalog;
use campus_core::config::{CampusConfig, EmbeddingConfig, RetrievalConfig};
use campus_core::errors::CampusResult;
use campus_core::intent::IntentResult;
use campus_core::knowledge::KnowledgeEntry;
use campus_core::models::{
    DegradationEvent, NormalizedQuery, QueryAnalysis, RetrievalVerdict, ScoredMatch, VerdictSource,
};
use campus_core::traits::{IEmbeddingProvider, IVariationStrategy};
use tracing::{debug, info, info_span, Instrument};

use crate::context;
use crate::intent::IntentClassifier;
use crate::normalize::Normalizer;
use crate::ranking::{RankingPipeline, Scorer};
use crate::search::{rank_by_similarity, VectorFallback, VectorHit};
use crate::variation::{EmbeddingVariation, RuleBasedVariation};

/// Outcome of the synchronous part of the pipeline.
enum LexicalStage {
    /// Terminal verdict: answered locally or deferred by intent.
    Decided(RetrievalVerdict),
    /// No confident lexical match; the vector fallback may still answer.
    Inconclusive(RetrievalVerdict),
}

/// Immutable after construction; safe to share across threads and tasks.
pub struct RetrievalEngine {
    normalizer: Normalizer,
    classifier: IntentClassifier,
    ranking: RankingPipeline,
    vector: VectorFallback,
    config: RetrievalConfig,
}

impl RetrievalEngine {
    /// Compile `catalog` and wire the rule-based variation strategy.
    pub fn new(catalog: &RuleCatalog, config: &CampusConfig) -> CampusResult<Self> {
        let variation: Arc<dyn IVariationStrategy> =
            Arc::new(RuleBasedVariation::new(&catalog.variations)?);
        Ok(Self {
            normalizer: Normalizer::new(&catalog.lexicon),
            classifier: IntentClassifier::new(&catalog.intents)?,
            ranking: RankingPipeline::new(Scorer::new(variation, &config.retrieval), &config.retrieval),
            vector: VectorFallback::new(config.embedding.clone()),
            config: config.retrieval.clone(),
        })
    }

    /// Load the catalog named by `[catalog]` (or the built-in one) and build.
    pub fn from_config(config: &CampusConfig) -> CampusResult<Self> {
        let catalog = config.load_catalog()?;
        Self::new(&catalog, config)
    }

    pub fn with_embedding_provider(mut self, provider: Arc<dyn IEmbeddingProvider>) -> Self {
        self.vector = self.vector.with_provider(provider);
        self
    }

    /// Swap the variation strategy used by the scorer.
    pub fn with_variation_strategy(mut self, strategy: Arc<dyn IVariationStrategy>) -> Self {
        self.ranking = RankingPipeline::new(Scorer::new(strategy, &self.config), &self.config);
        self
    }

    /// Replace the rule-based variation strategy with embedding similarity,
    /// thresholded by `[embedding] variation_similarity`.
    pub fn with_embedding_variation(self, provider: Arc<dyn IEmbeddingProvider>) -> Self {
        let strategy = EmbeddingVariation::from_config(provider, self.embedding_config());
        self.with_variation_strategy(Arc::new(strategy))
    }

    pub fn embedding_config(&self) -> &EmbeddingConfig {
        self.vector.config()
    }

    pub fn normalize(&self, raw_query: &str) -> NormalizedQuery {
        self.normalizer.normalize(raw_query)
    }

    pub fn classify(&self, raw_query: &str) -> IntentResult {
        let normalized = self.normalizer.normalize(raw_query);
        self.classifier.classify_prepared(raw_query, &normalized.text)
    }

    /// Normalization and intent for a query, without touching the knowledge base.
    pub fn analyze(&self, raw_query: &str) -> QueryAnalysis {
        let normalized = self.normalizer.normalize(raw_query);
        let intent = self.classifier.classify_prepared(raw_query, &normalized.text);
        QueryAnalysis::new(normalized.text, normalized.tokens, intent)
    }

    /// Score a single entry, exposing every signal contribution.
    pub fn score<'a>(
        &self,
        raw_query: &str,
        entry: &'a KnowledgeEntry,
        intent: &IntentResult,
    ) -> ScoredMatch<'a> {
        let query = self.normalizer.normalize(raw_query);
        self.ranking.scorer().score(&query, entry, 0, intent)
    }

    /// All non-zero matches, best first.
    pub fn rank<'a>(&self, raw_query: &str, entries: &'a [KnowledgeEntry]) -> Vec<ScoredMatch<'a>> {
        let query = self.normalizer.normalize(raw_query);
        let intent = self.classifier.classify_prepared(raw_query, &query.text);
        self.ranking.rank(&query, entries, &intent)
    }

    pub fn is_variation_of(&self, query: &str, keyword: &str) -> bool {
        self.ranking.scorer().variation_strategy().is_variation_of(query, keyword)
    }

    pub fn variation_score(&self, query: &str, keyword: &str) -> u32 {
        self.ranking.scorer().variation_strategy().variation_score(query, keyword)
    }

    /// Rank entries by cosine similarity to a precomputed query embedding.
    pub fn vector_search<'a>(
        &self,
        query_embedding: &[f32],
        entries: &'a [KnowledgeEntry],
        top_k: usize,
    ) -> Vec<VectorHit<'a>> {
        rank_by_similarity(
            query_embedding,
            entries,
            top_k,
            self.vector.config().min_similarity,
        )
    }

    /// Full pipeline with an optional precomputed query embedding. Never
    /// blocks and never fails.
    pub fn retrieve_with_embedding(
        &self,
        raw_query: &str,
        entries: &[KnowledgeEntry],
        query_embedding: Option<&[f32]>,
    ) -> RetrievalVerdict {
        let _span = info_span!("campus.retrieval", query = %raw_query).entered();
        let verdict = match self.lexical_stage(raw_query, entries) {
            LexicalStage::Decided(verdict) => verdict,
            LexicalStage::Inconclusive(verdict) => {
                let hits = match query_embedding {
                    Some(embedding) if self.vector.config().enabled => {
                        self.vector_search(embedding, entries, self.config.vector_top_k)
                    }
                    _ => Vec::new(),
                };
                finish_with_vector(verdict, &hits, None)
            }
        };
        log_verdict(&verdict);
        verdict
    }

    /// Full pipeline. Embeds the query with the configured provider when the
    /// lexical stage is inconclusive; the embedding call is time-boxed and its
    /// failure only removes the vector signal.
    pub async fn retrieve(&self, raw_query: &str, entries: &[KnowledgeEntry]) -> RetrievalVerdict {
        let span = info_span!("campus.retrieval", query = %raw_query);
        async {
            let verdict = match self.lexical_stage(raw_query, entries) {
                LexicalStage::Decided(verdict) => verdict,
                LexicalStage::Inconclusive(verdict) if self.vector.is_applicable(entries) => {
                    let outcome = self
                        .vector
                        .search(raw_query, entries, self.config.vector_top_k)
                        .await;
                    finish_with_vector(verdict, &outcome.hits, outcome.degradation)
                }
                LexicalStage::Inconclusive(verdict) => verdict,
            };
            log_verdict(&verdict);
            verdict
        }
        .instrument(span)
        .await
    }

    fn lexical_stage(&self, raw_query: &str, entries: &[KnowledgeEntry]) -> LexicalStage {
        let query = self.normalizer.normalize(raw_query);
        let intent = self.classifier.classify_prepared(raw_query, &query.text);

        if intent.should_use_fallback {
            debug!(intent = %intent.intent, reason = %intent.reason, "deferring on intent");
            return LexicalStage::Decided(RetrievalVerdict::fallback(intent, query.text));
        }

        let ranked = self.ranking.rank(&query, entries, &intent);
        let selected = self.ranking.select(&ranked);
        debug!(
            candidates = ranked.len(),
            top_score = ranked.first().map(|m| m.score).unwrap_or(0),
            confident = !selected.is_empty(),
            "lexical ranking complete"
        );

        let matches = ranked.iter().map(ScoredMatch::explain).collect();
        let mut verdict = RetrievalVerdict::fallback(intent, query.text);
        verdict.matches = matches;

        match selected.first() {
            Some(top) => {
                verdict.use_local = true;
                verdict.best_entry = Some(top.entry.clone());
                verdict.context_text = context::lexical_context(&selected);
                verdict.source = VerdictSource::Lexical;
                LexicalStage::Decided(verdict)
            }
            None => LexicalStage::Inconclusive(verdict),
        }
    }
}

fn finish_with_vector(
    mut verdict: RetrievalVerdict,
    hits: &[VectorHit<'_>],
    degradation: Option<DegradationEvent>,
) -> RetrievalVerdict {
    verdict.degradations.extend(degradation);
    if let Some(top) = hits.first() {
        debug!(keyword = %top.entry.keyword, similarity = top.similarity, "vector fallback hit");
        verdict.use_local = true;
        verdict.best_entry = None;
        verdict.context_text = context::vector_context(hits);
        verdict.source = VerdictSource::Vector;
    }
    verdict
}

fn log_verdict(verdict: &RetrievalVerdict) {
    info!(
        use_local = verdict.use_local,
        source = ?verdict.source,
        intent = %verdict.intent.intent,
        best = verdict.best_keyword().unwrap_or(""),
        "retrieval complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RetrievalEngine {
        RetrievalEngine::from_config(&CampusConfig::default()).unwrap()
    }

    #[test]
    fn analyze_reports_normalization_and_intent() {
        let a = engine().analyze("How much are the FEES?");
        assert_eq!(a.normalized_text, "how much are the fees");
        assert_eq!(a.tokens, vec!["much", "fees"]);
        assert_eq!(a.intent.intent, "fees");
        assert!(!a.should_use_fallback);
    }

    #[test]
    fn unknown_intent_defers_without_scoring() {
        let kb = vec![KnowledgeEntry::new("zzz", "answer")];
        let v = engine().retrieve_with_embedding("zzz", &kb, None);
        assert!(!v.use_local);
        assert!(v.matches.is_empty());
        assert_eq!(v.source, VerdictSource::None);
    }

    #[test]
    fn confident_match_answers_locally() {
        let kb = vec![
            KnowledgeEntry::new("tuition fees", "UGX 1,200,000 per semester"),
            KnowledgeEntry::new("chapel", "Sundays"),
        ];
        let v = engine().retrieve_with_embedding("tuition fees", &kb, None);
        assert!(v.use_local);
        assert_eq!(v.best_keyword(), Some("tuition fees"));
        assert_eq!(v.context_text, "tuition fees: UGX 1,200,000 per semester");
        assert_eq!(v.source, VerdictSource::Lexical);
    }

    #[test]
    fn precomputed_embedding_answers_when_lexical_is_inconclusive() {
        let kb = vec![KnowledgeEntry::new("bursar office", "Block B").with_embedding(vec![1.0, 0.0])];
        let v = engine().retrieve_with_embedding("tuition", &kb, Some(&[1.0, 0.0]));
        assert!(v.use_local);
        assert!(v.best_entry.is_none());
        assert_eq!(v.context_text, "bursar office: Block B");
        assert_eq!(v.source, VerdictSource::Vector);
    }
}
