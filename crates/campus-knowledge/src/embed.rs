//! Precompute entry embeddings with a provider.

use campus_core::knowledge::KnowledgeEntry;
use campus_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Embed each entry's chunk text and attach the vector. Entries that
/// already carry an embedding are left alone; provider failures leave the
/// entry without one. Returns the number of entries embedded.
pub fn attach_embeddings(entries: &mut [KnowledgeEntry], provider: &dyn IEmbeddingProvider) -> usize {
    let mut embedded = 0;
    let mut failed = 0;
    for entry in entries.iter_mut().filter(|e| e.embedding.is_none()) {
        match provider.embed(&entry.chunk_text()) {
            Ok(vector) if !vector.is_empty() => {
                entry.embedding = Some(vector);
                embedded += 1;
            }
            Ok(_) => failed += 1,
            Err(e) => {
                warn!(provider = provider.name(), keyword = %entry.keyword, error = %e, "embedding failed");
                failed += 1;
            }
        }
    }
    info!(provider = provider.name(), embedded, failed, "attached entry embeddings");
    embedded
}
