//! # scout-retrieval
//!
//! Two-stage model selection over a loaded catalog.
//!
//! ## Pipeline
//!
//! ```text
//! PromptSpec
//!   → query text (instruction, or a rewritten hypothetical description)
//!   → first stage: FTS5 BM25 (sparse) or embedding dot product (dense), first_stage_depth hits
//!   → rescoring: raw × log10(downloads + 2), oversized models excluded
//!   → stable sort, top search_depth names
//! ```

pub mod dense;
pub mod engine;
pub mod expansion;
pub mod rescale;
pub mod sparse;

pub use dense::DenseRetriever;
pub use engine::ModelSelector;
pub use expansion::{create_rewriter, LlmRewriter, TemplateRewriter};
pub use rescale::ScoreRescaler;
pub use sparse::{Bm25Index, SparseRetriever};
