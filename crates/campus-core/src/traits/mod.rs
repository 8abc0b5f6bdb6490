mod embedding;
mod knowledge_source;
mod variation;

pub use embedding::IEmbeddingProvider;
pub use knowledge_source::IKnowledgeSource;
pub use variation::IVariationStrategy;
