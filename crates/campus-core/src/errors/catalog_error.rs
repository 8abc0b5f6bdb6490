/// Rule catalog errors, raised while loading or compiling rule tables.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid pattern in rule '{rule}': {reason}")]
    InvalidPattern { rule: String, reason: String },

    #[error("catalog parse failed: {reason}")]
    ParseFailed { reason: String },

    #[error("duplicate intent '{name}' in catalog")]
    DuplicateIntent { name: String },
}
