//! Knowledge entries: the retrievable question/answer units.

mod entry;
mod source;

pub use entry::KnowledgeEntry;
pub use source::KnowledgeSource;
