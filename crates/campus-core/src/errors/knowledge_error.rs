/// Knowledge loading errors.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse knowledge records: {reason}")]
    ParseFailed { reason: String },

    #[error("knowledge source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },
}
