//! Knowledge loading: static-file and database-exported JSON records.
//!
//! Records accept the field aliases used by the admin tooling:
//! `keyword` | `question` | `title` for the topic and `answer` | `content`
//! for the body. Records without both are dropped with a warning.

mod json_source;
mod merged_source;
mod record;

pub use json_source::JsonFileSource;
pub use merged_source::MergedSource;
pub use record::RawRecord;

use campus_core::errors::{CampusResult, KnowledgeError};
use campus_core::knowledge::{KnowledgeEntry, KnowledgeSource};
use tracing::{debug, warn};

/// Parse a JSON array of records and convert them for `source`.
pub fn parse_records(json: &str, source: KnowledgeSource) -> CampusResult<Vec<KnowledgeEntry>> {
    let records: Vec<RawRecord> =
        serde_json::from_str(json).map_err(|e| KnowledgeError::ParseFailed {
            reason: e.to_string(),
        })?;
    Ok(into_entries(records, source))
}

/// Records from the bundled static knowledge file.
pub fn parse_static_records(json: &str) -> CampusResult<Vec<KnowledgeEntry>> {
    parse_records(json, KnowledgeSource::StaticFile)
}

/// Records exported from the admin database.
pub fn parse_database_records(json: &str) -> CampusResult<Vec<KnowledgeEntry>> {
    parse_records(json, KnowledgeSource::Database)
}

/// Convert records, keeping input order and dropping invalid ones.
pub fn into_entries(records: Vec<RawRecord>, source: KnowledgeSource) -> Vec<KnowledgeEntry> {
    let total = records.len();
    let entries: Vec<KnowledgeEntry> = records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let entry = record.into_entry(source);
            if entry.is_none() {
                warn!(index = i, source = source.as_str(), "dropping record without keyword or answer");
            }
            entry
        })
        .collect();
    debug!(
        source = source.as_str(),
        kept = entries.len(),
        dropped = total - entries.len(),
        "converted knowledge records"
    );
    entries
}

/// Static entries first, then database entries.
pub fn merge_sources(
    static_entries: Vec<KnowledgeEntry>,
    database_entries: Vec<KnowledgeEntry>,
) -> Vec<KnowledgeEntry> {
    let mut merged = static_entries;
    merged.extend(database_entries);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_keyword_and_answer() {
        let json = r#"[
            {"question": "How do I apply?", "answer": "Online."},
            {"title": "Chapel", "content": "Saturdays."},
            {"keyword": "fees", "question": "ignored", "answer": "UGX"}
        ]"#;
        let entries = parse_static_records(json).unwrap();
        let keywords: Vec<&str> = entries.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["How do I apply?", "Chapel", "fees"]);
        assert_eq!(entries[1].answer, "Saturdays.");
        assert!(entries.iter().all(|e| e.source == KnowledgeSource::StaticFile));
    }

    #[test]
    fn invalid_records_are_dropped() {
        let json = r#"[
            {"keyword": "", "answer": "x"},
            {"keyword": "k"},
            {"keyword": "  ", "answer": "y"},
            {"keyword": "ok", "answer": "fine"}
        ]"#;
        let entries = parse_static_records(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].keyword, "ok");
    }

    #[test]
    fn database_records_get_default_priority_and_category() {
        let json = r#"[
            {"question": "graduation date", "answer": "November"},
            {"keyword": "fees", "answer": "UGX", "priority": 80, "type": "finance"}
        ]"#;
        let entries = parse_database_records(json).unwrap();
        assert_eq!(entries[0].priority, Some(50));
        assert_eq!(entries[0].category.as_deref(), Some("general"));
        assert_eq!(entries[1].priority, Some(80));
        assert_eq!(entries[1].category.as_deref(), Some("finance"));
        assert_eq!(entries[1].source, KnowledgeSource::Database);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(parse_static_records("{not json").is_err());
        assert!(parse_static_records(r#"{"keyword": "not an array"}"#).is_err());
    }

    #[test]
    fn merge_keeps_static_before_database() {
        let merged = merge_sources(
            vec![KnowledgeEntry::new("a", "1")],
            vec![KnowledgeEntry::new("b", "2").with_source(KnowledgeSource::Database)],
        );
        assert_eq!(merged[0].keyword, "a");
        assert_eq!(merged[1].source, KnowledgeSource::Database);
    }
}
