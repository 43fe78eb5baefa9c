//! Span definitions per operation: selection, catalog load, index build.

/// Create a model-selection span.
#[macro_export]
macro_rules! selection_span {
    ($backend:expr, $depth:expr) => {
        tracing::info_span!("scout.selection", backend = %$backend, search_depth = $depth)
    };
}

/// Create a catalog-load span.
#[macro_export]
macro_rules! catalog_span {
    ($dir:expr) => {
        tracing::info_span!("scout.catalog", dir = %$dir)
    };
}

/// Create an index-build span.
#[macro_export]
macro_rules! index_span {
    ($backend:expr, $path:expr) => {
        tracing::info_span!("scout.index", backend = %$backend, path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SELECTION: &str = "scout.selection";
    pub const CATALOG: &str = "scout.catalog";
    pub const INDEX: &str = "scout.index";
}
