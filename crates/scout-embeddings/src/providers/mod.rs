//! Encoder providers and provider selection.

pub mod hashing;
#[cfg(feature = "onnx")]
pub mod onnx_provider;

pub use hashing::HashingEncoder;
#[cfg(feature = "onnx")]
pub use onnx_provider::OnnxEncoder;

use scout_core::config::EmbeddingConfig;
use scout_core::traits::ITextEncoder;
use tracing::warn;

/// Build the encoder named by `config.provider`.
///
/// Any failure to bring up the ONNX encoder falls back to [`HashingEncoder`]
/// with a warning, so a dense selector can always be constructed.
pub fn create_encoder(config: &EmbeddingConfig) -> Box<dyn ITextEncoder> {
    match config.provider.as_str() {
        "onnx" => onnx_or_fallback(config),
        "hashing" | "tfidf" => Box::new(HashingEncoder::new(config.dimensions)),
        other => {
            warn!(provider = other, "unknown encoder provider, using hashing encoder");
            Box::new(HashingEncoder::new(config.dimensions))
        }
    }
}

#[cfg(feature = "onnx")]
fn onnx_or_fallback(config: &EmbeddingConfig) -> Box<dyn ITextEncoder> {
    let Some(path) = config.model_path.as_deref() else {
        warn!(
            encoder = %config.encoder_model_name,
            "no model_path configured for onnx encoder, using hashing encoder"
        );
        return Box::new(HashingEncoder::new(config.dimensions));
    };
    match OnnxEncoder::load(
        path,
        &config.encoder_model_name,
        config.dimensions,
        config.device,
    ) {
        Ok(encoder) => {
            tracing::info!(encoder = %config.encoder_model_name, device = %config.device, "onnx encoder ready");
            Box::new(encoder)
        }
        Err(e) => {
            warn!(error = %e, "onnx encoder failed to load, using hashing encoder");
            Box::new(HashingEncoder::new(config.dimensions))
        }
    }
}

#[cfg(not(feature = "onnx"))]
fn onnx_or_fallback(config: &EmbeddingConfig) -> Box<dyn ITextEncoder> {
    warn!(
        encoder = %config.encoder_model_name,
        "built without the `onnx` feature, using hashing encoder"
    );
    Box::new(HashingEncoder::new(config.dimensions))
}
