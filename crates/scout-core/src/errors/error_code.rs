//! ScoutErrorCode trait for host-facing error strings.

/// Trait for mapping Scout errors to stable error code strings.
/// Every error enum implements this so embedding hosts can match on
/// a code instead of parsing messages.
pub trait ScoutErrorCode {
    /// Returns the error code string (e.g., "NO_RESULTS").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_FETCH_FAILED: &str = "CATALOG_FETCH_FAILED";
pub const CATALOG_READ_FAILED: &str = "CATALOG_READ_FAILED";
pub const CATALOG_MALFORMED: &str = "CATALOG_MALFORMED";
pub const EMBEDDING_ERROR: &str = "EMBEDDING_ERROR";
pub const INDEX_ERROR: &str = "INDEX_ERROR";
pub const CATALOG_DESYNC: &str = "CATALOG_DESYNC";
pub const NO_RESULTS: &str = "NO_RESULTS";
pub const REWRITE_FAILED: &str = "REWRITE_FAILED";
pub const IO_ERROR: &str = "IO_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
