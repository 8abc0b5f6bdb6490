//! Fixed-size character windows over long documents, turned into
//! `Ingested` knowledge entries.

use campus_core::knowledge::{KnowledgeEntry, KnowledgeSource};
use tracing::debug;

pub const DEFAULT_CHUNK_SIZE: usize = 800;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Split `text` into windows of `size` characters, each starting
/// `size - overlap` characters after the previous one. The last window may
/// be shorter. An overlap at or above `size` advances one character at a
/// time.
pub fn chunk_text(text: &str, size: usize, overlap: usize) -> Vec<String> {
    if text.is_empty() || size == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    let step = size.saturating_sub(overlap).max(1);

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        start += step;
    }
    chunks
}

/// Chunk a document into entries keyed `"{title} (part n)"`, numbered from 1.
/// Whitespace-only chunks are skipped.
pub fn ingest_document(title: &str, text: &str, size: usize, overlap: usize) -> Vec<KnowledgeEntry> {
    let entries: Vec<KnowledgeEntry> = chunk_text(text, size, overlap)
        .into_iter()
        .filter(|c| !c.trim().is_empty())
        .enumerate()
        .map(|(i, chunk)| {
            KnowledgeEntry::new(format!("{title} (part {})", i + 1), chunk)
                .with_source(KnowledgeSource::Ingested)
        })
        .collect();
    debug!(title, chunks = entries.len(), "ingested document");
    entries
}
