use std::path::{Path, PathBuf};

use campus_core::errors::{CampusResult, KnowledgeError};
use campus_core::knowledge::{KnowledgeEntry, KnowledgeSource};
use campus_core::traits::IKnowledgeSource;
use tracing::info;

use super::parse_records;

/// A JSON array of records on disk, tagged with the source it represents.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    source: KnowledgeSource,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>, source: KnowledgeSource) -> Self {
        let path = path.into();
        let name = format!("{}:{}", source.as_str(), path.display());
        Self { path, source, name }
    }

    /// The bundled static knowledge file.
    pub fn static_file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, KnowledgeSource::StaticFile)
    }

    /// A JSON export of the admin database.
    pub fn database_export(path: impl Into<PathBuf>) -> Self {
        Self::new(path, KnowledgeSource::Database)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IKnowledgeSource for JsonFileSource {
    fn load_entries(&self) -> CampusResult<Vec<KnowledgeEntry>> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| KnowledgeError::ReadFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        let entries = parse_records(&content, self.source)?;
        info!(source = %self.name, entries = entries.len(), "loaded knowledge file");
        Ok(entries)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
