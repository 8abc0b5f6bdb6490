//! # campus-knowledge
//!
//! Everything upstream of the retrieval engine: reading static and
//! database-exported records, dropping invalid ones, merging sources,
//! chunking long documents into `Ingested` entries, attaching embeddings,
//! and publishing whole-collection snapshots to concurrent readers.

pub mod chunker;
pub mod embed;
pub mod enrichment;
pub mod loader;
pub mod store;

pub use chunker::{chunk_text, ingest_document};
pub use embed::attach_embeddings;
pub use enrichment::expand_entry;
pub use loader::{merge_sources, JsonFileSource, MergedSource};
pub use store::KnowledgeStore;
