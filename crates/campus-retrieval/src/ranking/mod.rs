//! RankingPipeline: score every entry, order with tie-breaks, apply the
//! confidence thresholds.

pub mod scorer;

use std::cmp::Ordering;

use campus_core::config::RetrievalConfig;
use campus_core::intent::IntentResult;
use campus_core::knowledge::KnowledgeEntry;
use campus_core::models::{MatchTier, NormalizedQuery, ScoredMatch};

pub use scorer::Scorer;

/// Full lexical ranking: score, sort, threshold.
pub struct RankingPipeline {
    scorer: Scorer,
    structural_threshold: u32,
    overlap_threshold: u32,
    max_context_entries: usize,
}

impl RankingPipeline {
    pub fn new(scorer: Scorer, config: &RetrievalConfig) -> Self {
        Self {
            scorer,
            structural_threshold: config.structural_threshold,
            overlap_threshold: config.overlap_threshold,
            max_context_entries: config.max_context_entries,
        }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Every entry with a non-zero score, best first, ranks assigned.
    pub fn rank<'a>(
        &self,
        query: &NormalizedQuery,
        entries: &'a [KnowledgeEntry],
        intent: &IntentResult,
    ) -> Vec<ScoredMatch<'a>> {
        let mut matches: Vec<ScoredMatch<'a>> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| self.scorer.score(query, entry, index, intent))
            .filter(|m| m.score > 0)
            .collect();
        sort_matches(&mut matches);
        matches
    }

    /// Whether a match clears the threshold for the tier it qualified on.
    pub fn is_confident(&self, m: &ScoredMatch<'_>) -> bool {
        match m.tier {
            MatchTier::Structural => m.score > self.structural_threshold,
            MatchTier::Overlap => m.score > self.overlap_threshold,
            MatchTier::None => false,
        }
    }

    /// Matches that feed the answer context. Empty unless the top match is
    /// confident; otherwise up to `max_context_entries` confident matches.
    pub fn select<'m, 'a>(&self, ranked: &'m [ScoredMatch<'a>]) -> Vec<&'m ScoredMatch<'a>> {
        match ranked.first() {
            Some(top) if self.is_confident(top) => ranked
                .iter()
                .filter(|m| self.is_confident(m))
                .take(self.max_context_entries.max(1))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Score descending, then priority descending, then source precedence
/// (database, static file, ingested), then knowledge-base order.
pub fn compare_matches(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| {
            b.entry
                .effective_priority()
                .cmp(&a.entry.effective_priority())
        })
        .then_with(|| b.entry.source.precedence().cmp(&a.entry.source.precedence()))
        .then_with(|| a.index.cmp(&b.index))
}

/// Sort in place and assign 1-based ranks.
pub fn sort_matches(matches: &mut [ScoredMatch<'_>]) {
    matches.sort_by(compare_matches);
    for (i, m) in matches.iter_mut().enumerate() {
        m.rank = i + 1;
    }
}
