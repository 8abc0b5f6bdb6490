use campus_core::errors::{CampusResult, KnowledgeError};
use campus_core::knowledge::KnowledgeEntry;
use campus_core::traits::IKnowledgeSource;
use tracing::{info, warn};

/// Concatenates several sources in order.
///
/// A failing source is logged and skipped. The load only fails when every
/// source fails, so a partial outage still yields the entries that could be
/// read.
pub struct MergedSource {
    sources: Vec<Box<dyn IKnowledgeSource>>,
}

impl MergedSource {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: impl IKnowledgeSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for MergedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IKnowledgeSource for MergedSource {
    fn load_entries(&self) -> CampusResult<Vec<KnowledgeEntry>> {
        let mut merged = Vec::new();
        let mut failures = Vec::new();

        for source in &self.sources {
            match source.load_entries() {
                Ok(entries) => merged.extend(entries),
                Err(e) => {
                    warn!(source = source.name(), error = %e, "knowledge source failed, skipping");
                    failures.push(format!("{}: {e}", source.name()));
                }
            }
        }

        if !self.sources.is_empty() && failures.len() == self.sources.len() {
            return Err(KnowledgeError::SourceUnavailable {
                source_name: self.name().to_string(),
                reason: failures.join("; "),
            }
            .into());
        }

        info!(entries = merged.len(), sources = self.sources.len(), "merged knowledge sources");
        Ok(merged)
    }

    fn name(&self) -> &str {
        "merged"
    }
}
