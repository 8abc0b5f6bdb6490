//! In-memory knowledge store with whole-collection swaps.
//!
//! Readers take an `Arc` snapshot and keep it for the lifetime of a
//! retrieval call. Writers build a complete new collection and swap the
//! reference, so a reader never observes a half-updated knowledge base.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use campus_core::errors::CampusResult;
use campus_core::knowledge::KnowledgeEntry;
use campus_core::traits::IKnowledgeSource;
use tracing::{info, warn};

pub struct KnowledgeStore {
    current: RwLock<Arc<[KnowledgeEntry]>>,
    generation: AtomicU64,
}

impl KnowledgeStore {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        Self {
            current: RwLock::new(validated(entries).into()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The current collection. Cheap: clones an `Arc`.
    pub fn snapshot(&self) -> Arc<[KnowledgeEntry]> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the whole collection. Invalid entries are dropped.
    /// Returns the number of entries published.
    pub fn publish(&self, entries: Vec<KnowledgeEntry>) -> usize {
        let next: Arc<[KnowledgeEntry]> = validated(entries).into();
        let count = next.len();
        {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *guard = next;
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(entries = count, generation, "knowledge base published");
        count
    }

    /// Load from `source` and publish. On failure the previous snapshot
    /// stays in place and the error is returned.
    pub fn reload(&self, source: &dyn IKnowledgeSource) -> CampusResult<usize> {
        match source.load_entries() {
            Ok(entries) => Ok(self.publish(entries)),
            Err(e) => {
                warn!(
                    source = source.name(),
                    error = %e,
                    kept = self.len(),
                    "knowledge reload failed, keeping previous snapshot"
                );
                Err(e)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful publishes since construction.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::empty()
    }
}

fn validated(entries: Vec<KnowledgeEntry>) -> Vec<KnowledgeEntry> {
    let before = entries.len();
    let kept: Vec<KnowledgeEntry> = entries.into_iter().filter(KnowledgeEntry::is_valid).collect();
    if kept.len() < before {
        warn!(dropped = before - kept.len(), "dropping invalid knowledge entries");
    }
    kept
}
