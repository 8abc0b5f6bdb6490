use campus_core::errors::*;

#[test]
fn config_error_carries_reason() {
    let err = CampusError::Config {
        reason: "bad section".into(),
    };
    assert!(err.to_string().contains("bad section"));
}

#[test]
fn serde_json_error_converts_to_campus_error() {
    let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
    let err: CampusError = json_err.into();
    assert!(matches!(err, CampusError::SerializationError(_)));
    assert!(err.to_string().starts_with("serialization error"));
}

#[test]
fn embedding_timeout_carries_budget() {
    let err = EmbeddingError::Timeout { timeout_ms: 2000 };
    assert!(err.to_string().contains("2000"));
}

// --- From impls ---

#[test]
fn catalog_error_converts_to_campus_error() {
    let err: CampusError = CatalogError::InvalidPattern {
        rule: "joke".into(),
        reason: "unclosed group".into(),
    }
    .into();
    assert!(matches!(err, CampusError::CatalogError(_)));
    assert!(err.to_string().contains("joke"));
}

#[test]
fn embedding_error_converts_to_campus_error() {
    let err: CampusError = EmbeddingError::DimensionMismatch {
        expected: 768,
        actual: 384,
    }
    .into();
    assert!(matches!(err, CampusError::EmbeddingError(_)));
}

#[test]
fn knowledge_error_converts_to_campus_error() {
    let err: CampusError = KnowledgeError::ParseFailed {
        reason: "expected array".into(),
    }
    .into();
    assert!(matches!(err, CampusError::KnowledgeError(_)));
}

#[test]
fn retrieval_error_converts_to_campus_error() {
    let err: CampusError = RetrievalError::NoEmbeddingProvider.into();
    assert!(matches!(err, CampusError::RetrievalError(_)));
}
