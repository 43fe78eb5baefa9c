use scout_core::errors::*;

#[test]
fn no_results_is_detectable() {
    let err: ScoutError = RetrievalError::NoResults.into();
    assert!(err.is_no_results());
    assert_eq!(err.error_code(), "NO_RESULTS");
}

#[test]
fn desync_carries_model_name() {
    let err = RetrievalError::CatalogDesync {
        name: "org/ghost-model".into(),
    };
    assert!(err.to_string().contains("org/ghost-model"));
    assert_eq!(err.error_code(), "CATALOG_DESYNC");
}

#[test]
fn fetch_failure_carries_url_and_reason() {
    let err = CatalogError::FetchFailed {
        url: "http://example.invalid/model_info.tgz".into(),
        reason: "connection refused".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("example.invalid"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn catalog_error_converts_to_scout_error() {
    let err: ScoutError = CatalogError::DuplicateModel { name: "a".into() }.into();
    assert!(matches!(err, ScoutError::Catalog(_)));
    assert_eq!(err.error_code(), "CATALOG_MALFORMED");
}

#[test]
fn config_error_converts_to_scout_error() {
    let err: ScoutError = ConfigError::ConflictingIndexPath {
        backend: "sparse".into(),
    }
    .into();
    assert!(matches!(err, ScoutError::Config(_)));
    assert!(err.coded_string().starts_with("[CONFIG_ERROR]"));
}

#[test]
fn embedding_error_converts_to_scout_error() {
    let err: ScoutError = EmbeddingError::DimensionMismatch {
        expected: 768,
        actual: 384,
    }
    .into();
    assert!(matches!(err, ScoutError::Embedding(_)));
    assert!(err.to_string().contains("768"));
}

#[test]
fn serialization_error_converts_to_scout_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: ScoutError = json_err.into();
    assert!(matches!(err, ScoutError::Serialization(_)));
    assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
}

#[test]
fn io_error_converts_to_scout_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: ScoutError = io.into();
    assert_eq!(err.error_code(), "IO_ERROR");
}
