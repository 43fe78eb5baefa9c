//! # scout-embeddings
//!
//! Text encoders for the dense backend, plus the persisted embedding matrix.
//!
//! ## Architecture
//!
//! ```text
//! EncoderEngine
//! ├── ITextEncoder (HashingEncoder | OnnxEncoder)
//! ├── QueryCache (moka, keyed by blake3 of the query text)
//! └── EmbeddingMatrix (one row per catalog record, dot-product scoring)
//! ```

pub mod cache;
pub mod engine;
pub mod matrix;
pub mod providers;

pub use engine::EncoderEngine;
pub use matrix::EmbeddingMatrix;
pub use providers::{create_encoder, HashingEncoder};

#[cfg(feature = "onnx")]
pub use providers::OnnxEncoder;
