// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_OVERLAP_THRESHOLD: u32 = 15;
pub const DEFAULT_STRUCTURAL_THRESHOLD: u32 = 0;
pub const DEFAULT_MAX_CONTEXT_ENTRIES: usize = 3;
pub const DEFAULT_VECTOR_TOP_K: usize = 3;
pub const DEFAULT_VARIATION_BONUS: u32 = 40;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_ENABLED: bool = true;
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.3;
pub const DEFAULT_VARIATION_SIMILARITY: f64 = 0.8;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
