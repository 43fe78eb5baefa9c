//! # scout-core
//!
//! Foundation crate for the Scout model selector.
//! Defines the catalog data model, traits, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{Backend, ScoutConfig};
pub use errors::{ScoutError, ScoutResult};
pub use models::{Candidate, Catalog, ModelRecord, PromptSpec, ScoredModel};
