use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeEntry;

/// Individual relevance signals, keyed in the contribution map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    ExactMatch,
    QueryContainsKeyword,
    KeywordContainsQuery,
    KeywordPrefix,
    ContentWord,
    Synonym,
    PhraseSynonym,
    Variation,
    IntentCategory,
    WordOverlap,
}

impl Signal {
    /// Structural signals make a match confident on their own.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::ExactMatch
                | Self::QueryContainsKeyword
                | Self::KeywordContainsQuery
                | Self::KeywordPrefix
                | Self::Synonym
                | Self::PhraseSynonym
                | Self::Variation
        )
    }

    /// Signals that count as lexical evidence of a match.
    pub fn is_lexical(&self) -> bool {
        !matches!(self, Self::IntentCategory)
    }
}

/// How an entry qualified, which decides the confidence threshold applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Structural,
    Overlap,
    None,
}

/// Score of one entry against one query.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMatch<'a> {
    pub entry: &'a KnowledgeEntry,
    /// Position of the entry in the knowledge base (stable tie-break).
    pub index: usize,
    pub score: u32,
    pub signals: BTreeMap<Signal, u32>,
    pub tier: MatchTier,
    /// 1-based rank after sorting; 0 until ranked.
    pub rank: usize,
}

impl<'a> ScoredMatch<'a> {
    pub fn new(entry: &'a KnowledgeEntry, index: usize) -> Self {
        Self {
            entry,
            index,
            score: 0,
            signals: BTreeMap::new(),
            tier: MatchTier::None,
            rank: 0,
        }
    }

    /// Add a contribution; zero contributions are not recorded.
    pub fn add(&mut self, signal: Signal, points: u32) {
        if points == 0 {
            return;
        }
        *self.signals.entry(signal).or_default() += points;
        self.score += points;
    }

    pub fn has(&self, signal: Signal) -> bool {
        self.signals.contains_key(&signal)
    }

    pub fn contribution(&self, signal: Signal) -> u32 {
        self.signals.get(&signal).copied().unwrap_or(0)
    }

    pub fn explain(&self) -> MatchExplanation {
        MatchExplanation {
            keyword: self.entry.keyword.clone(),
            index: self.index,
            score: self.score,
            signals: self.signals.clone(),
            tier: self.tier,
            rank: self.rank,
        }
    }
}

/// Owned, serializable summary of a `ScoredMatch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchExplanation {
    pub keyword: String,
    pub index: usize,
    pub score: u32,
    pub signals: BTreeMap<Signal, u32>,
    pub tier: MatchTier,
    pub rank: usize,
}
