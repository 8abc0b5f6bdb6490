mod catalog_error;
mod embedding_error;
mod knowledge_error;
mod retrieval_error;

pub use catalog_error::CatalogError;
pub use embedding_error::EmbeddingError;
pub use knowledge_error::KnowledgeError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the campus knowledge engine.
#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    CatalogError(#[from] CatalogError),

    #[error(transparent)]
    EmbeddingError(#[from] EmbeddingError),

    #[error(transparent)]
    KnowledgeError(#[from] KnowledgeError),

    #[error(transparent)]
    RetrievalError(#[from] RetrievalError),
}

pub type CampusResult<T> = Result<T, CampusError>;
