/// Retrieval subsystem errors.
///
/// The retrieval path itself never fails; these surface only from the
/// explicit `try_*` vector search calls, which callers convert into
/// "no vector signal".
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("no embedding provider configured")]
    NoEmbeddingProvider,

    #[error("no knowledge entry carries an embedding")]
    NoEmbeddedEntries,
}
