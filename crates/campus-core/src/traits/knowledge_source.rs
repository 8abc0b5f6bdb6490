use crate::errors::CampusResult;
use crate::knowledge::KnowledgeEntry;

/// Supplies knowledge entries. De-duplication and schema validation happen
/// behind this boundary.
pub trait IKnowledgeSource: Send + Sync {
    fn load_entries(&self) -> CampusResult<Vec<KnowledgeEntry>>;

    fn name(&self) -> &str;
}
