use serde::{Deserialize, Serialize};

/// Where a knowledge entry came from.
///
/// Ordering matters for tie-breaks: admin-curated database content is
/// preferred over static files, which are preferred over ingested chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeSource {
    #[default]
    StaticFile,
    Database,
    Ingested,
}

impl KnowledgeSource {
    /// Tie-break rank, higher wins.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Database => 2,
            Self::StaticFile => 1,
            Self::Ingested => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StaticFile => "static_file",
            Self::Database => "database",
            Self::Ingested => "ingested",
        }
    }
}
