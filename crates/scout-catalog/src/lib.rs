//! # scout-catalog
//!
//! Loads the model catalog from a directory of per-model JSON records.
//! Fetches and unpacks the remote archive when the directory is missing,
//! skips hidden, empty, blocklisted, and incomplete entries.
//!
//! ## Architecture
//!
//! ```text
//! CatalogLoader
//! ├── ArchiveFetcher (HTTP or file:// download → tar.gz unpack)
//! ├── OrgBlocklist (organization prefix filter)
//! └── record parsing (pretrained_model_name, description, size_bytes, downloads)
//! ```

pub mod blocklist;
pub mod fetch;
pub mod loader;

pub use blocklist::OrgBlocklist;
pub use fetch::ArchiveFetcher;
pub use loader::{load_catalog_dir, CatalogLoader, LoadReport};
