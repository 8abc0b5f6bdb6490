//! Vector fallback: cosine ranking over precomputed entry embeddings.

pub mod vector_search;

pub use vector_search::{cosine_similarity, rank_by_similarity, VectorFallback, VectorHit, VectorOutcome};
