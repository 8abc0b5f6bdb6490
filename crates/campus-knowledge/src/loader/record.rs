use std::collections::BTreeSet;

use campus_core::constants::DEFAULT_DATABASE_PRIORITY;
use campus_core::knowledge::{KnowledgeEntry, KnowledgeSource};
use serde::Deserialize;

/// A knowledge record as stored on disk or exported from the database.
/// Every field is optional; `into_entry` decides validity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub keyword: Option<String>,
    pub question: Option<String>,
    pub title: Option<String>,
    pub answer: Option<String>,
    pub content: Option<String>,
    pub synonyms: Vec<String>,
    /// Older exports call synonyms `variations`.
    pub variations: Vec<String>,
    pub tags: BTreeSet<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub priority: Option<i32>,
    pub embedding: Option<Vec<f32>>,
}

fn first_present(candidates: [Option<String>; 3]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

impl RawRecord {
    /// Convert to an entry, or `None` when keyword or answer is missing.
    pub fn into_entry(self, source: KnowledgeSource) -> Option<KnowledgeEntry> {
        let keyword = first_present([self.keyword, self.question, self.title])?;
        let answer = first_present([self.answer, self.content, None])?;

        let mut synonyms = self.synonyms;
        for v in self.variations {
            if !synonyms.contains(&v) {
                synonyms.push(v);
            }
        }

        let (category, priority) = match source {
            KnowledgeSource::Database => (
                self.category
                    .or(self.kind)
                    .or_else(|| Some("general".to_string())),
                Some(self.priority.unwrap_or(DEFAULT_DATABASE_PRIORITY)),
            ),
            _ => (self.category.or(self.kind), self.priority),
        };

        Some(KnowledgeEntry {
            keyword: keyword.trim().to_string(),
            answer: answer.trim().to_string(),
            synonyms,
            tags: self.tags,
            category,
            priority,
            source,
            embedding: self.embedding,
        })
    }
}
