use serde::{Deserialize, Serialize};

/// Output of the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedQuery {
    /// Lower-cased, punctuation stripped, whitespace collapsed.
    pub text: String,
    /// Content tokens: length > 1 and either important or not a stop-word.
    pub tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
