//! Multi-signal relevance scorer.
//!
//! Signals, in evaluation order: exact match, query-contains-keyword,
//! keyword-contains-query, keyword prefix, content words, synonym/tag
//! (first hit only, phrase bonus for multi-word terms), variation, then the
//! word-overlap fallback when nothing lexical fired, and finally the
//! intent-category bonus for entries that already have lexical evidence.

use std::collections::HashSet;
use std::sync::Arc;

use campus_core::config::RetrievalConfig;
use campus_core::constants::{
    OVERLAP_ANSWER, OVERLAP_KEYWORD, OVERLAP_SYNONYM, SCORE_CONTENT_WORD, SCORE_EXACT_MATCH,
    SCORE_INTENT_CATEGORY, SCORE_KEYWORD_CONTAINS_QUERY, SCORE_KEYWORD_PREFIX,
    SCORE_PHRASE_SYNONYM, SCORE_QUERY_CONTAINS_KEYWORD, SCORE_SYNONYM,
};
use campus_core::intent::IntentResult;
use campus_core::knowledge::KnowledgeEntry;
use campus_core::models::{MatchTier, NormalizedQuery, ScoredMatch, Signal};
use campus_core::traits::IVariationStrategy;

use crate::normalize::normalize_text;

/// Scores one entry against one normalized query. Pure and deterministic
/// for a given variation strategy.
pub struct Scorer {
    variation: Arc<dyn IVariationStrategy>,
    variation_bonus: u32,
    overlap_threshold: u32,
}

impl Scorer {
    pub fn new(variation: Arc<dyn IVariationStrategy>, config: &RetrievalConfig) -> Self {
        Self {
            variation,
            variation_bonus: config.variation_bonus,
            overlap_threshold: config.overlap_threshold,
        }
    }

    pub fn variation_strategy(&self) -> &dyn IVariationStrategy {
        self.variation.as_ref()
    }

    pub fn score<'a>(
        &self,
        query: &NormalizedQuery,
        entry: &'a KnowledgeEntry,
        index: usize,
        intent: &IntentResult,
    ) -> ScoredMatch<'a> {
        let mut m = ScoredMatch::new(entry, index);
        let q = query.text.as_str();
        let k = normalize_text(&entry.keyword);
        if q.is_empty() || k.is_empty() {
            return m;
        }

        if k == q {
            m.add(Signal::ExactMatch, SCORE_EXACT_MATCH);
        }
        if q.contains(k.as_str()) {
            m.add(Signal::QueryContainsKeyword, SCORE_QUERY_CONTAINS_KEYWORD);
        }
        if k.contains(q) {
            m.add(Signal::KeywordContainsQuery, SCORE_KEYWORD_CONTAINS_QUERY);
        }
        if k.starts_with(q) {
            m.add(Signal::KeywordPrefix, SCORE_KEYWORD_PREFIX);
        }

        let keyword_words: HashSet<&str> = k.split_whitespace().collect();
        let content_hits = query
            .tokens
            .iter()
            .filter(|t| keyword_words.contains(t.as_str()))
            .count() as u32;
        m.add(Signal::ContentWord, content_hits * SCORE_CONTENT_WORD);

        for term in entry.match_terms() {
            let term = normalize_text(term);
            if term.is_empty() || !q.contains(term.as_str()) {
                continue;
            }
            m.add(Signal::Synonym, SCORE_SYNONYM);
            if term.split_whitespace().count() >= 2 {
                m.add(Signal::PhraseSynonym, SCORE_PHRASE_SYNONYM);
            }
            break;
        }

        let substring = m.has(Signal::QueryContainsKeyword) || m.has(Signal::KeywordContainsQuery);
        if !substring && self.variation.is_variation_of(q, &k) {
            m.add(Signal::Variation, self.variation_bonus);
        }

        if !has_lexical(&m) {
            let overlap = self.word_overlap(query, entry, &k);
            if overlap > self.overlap_threshold {
                m.add(Signal::WordOverlap, overlap);
            }
        }

        // Deliberately not unconditional: the category bonus only stacks on
        // lexical evidence, so a category alone never makes an entry relevant.
        if has_lexical(&m) {
            if let Some(category) = entry.category.as_deref() {
                if intent.covers_category(category) {
                    m.add(Signal::IntentCategory, SCORE_INTENT_CATEGORY);
                }
            }
        }

        m.tier = tier_of(&m);
        m
    }

    /// Per token: keyword substring, answer substring, and each synonym
    /// containing it.
    fn word_overlap(&self, query: &NormalizedQuery, entry: &KnowledgeEntry, keyword: &str) -> u32 {
        let answer = normalize_text(&entry.answer);
        let synonyms: Vec<String> = entry.synonyms.iter().map(|s| normalize_text(s)).collect();
        query
            .tokens
            .iter()
            .map(|t| {
                let mut points = 0;
                if keyword.contains(t.as_str()) {
                    points += OVERLAP_KEYWORD;
                }
                if answer.contains(t.as_str()) {
                    points += OVERLAP_ANSWER;
                }
                let in_synonyms = synonyms.iter().filter(|s| s.contains(t.as_str())).count() as u32;
                points + in_synonyms * OVERLAP_SYNONYM
            })
            .sum()
    }
}

fn has_lexical(m: &ScoredMatch<'_>) -> bool {
    m.signals.keys().any(Signal::is_lexical)
}

fn tier_of(m: &ScoredMatch<'_>) -> MatchTier {
    if m.signals.keys().any(Signal::is_structural) {
        MatchTier::Structural
    } else if has_lexical(m) {
        MatchTier::Overlap
    } else {
        MatchTier::None
    }
}
