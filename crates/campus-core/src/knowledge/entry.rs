use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::KnowledgeSource;

/// One retrievable question/answer unit.
///
/// Entries are immutable once loaded. `keyword` and `answer` are non-empty;
/// loaders drop records that violate this before the engine sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Canonical question or topic, unique within a source.
    pub keyword: String,
    /// Answer body.
    pub answer: String,
    /// Alternate phrasings, in match order.
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Higher is more authoritative.
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub source: KnowledgeSource,
    /// Precomputed embedding, if any.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl KnowledgeEntry {
    pub fn new(keyword: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            answer: answer.into(),
            synonyms: Vec::new(),
            tags: BTreeSet::new(),
            category: None,
            priority: None,
            source: KnowledgeSource::StaticFile,
            embedding: None,
        }
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_source(mut self, source: KnowledgeSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// True when both keyword and answer carry non-whitespace text.
    pub fn is_valid(&self) -> bool {
        !self.keyword.trim().is_empty() && !self.answer.trim().is_empty()
    }

    /// Synonyms followed by tags, the order in which the scorer tries them.
    pub fn match_terms(&self) -> impl Iterator<Item = &str> {
        self.synonyms
            .iter()
            .chain(self.tags.iter())
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// `keyword: answer`, the form handed to the answer synthesizer.
    pub fn context_line(&self) -> String {
        format!("{}: {}", self.keyword, self.answer)
    }

    /// Text chunk associated with this entry for vector hits.
    /// Ingested chunks are already self-contained text.
    pub fn chunk_text(&self) -> String {
        match self.source {
            KnowledgeSource::Ingested => self.answer.clone(),
            _ => self.context_line(),
        }
    }

    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(0)
    }
}
