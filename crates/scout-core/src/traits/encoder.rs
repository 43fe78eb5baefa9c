use crate::errors::ScoutResult;

/// Text encoder for the dense backend.
pub trait ITextEncoder: Send + Sync {
    /// Encode a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> ScoutResult<Vec<f32>>;

    /// Encode a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> ScoutResult<Vec<Vec<f32>>>;

    /// The dimensionality of vectors produced by this encoder.
    fn dimensions(&self) -> usize;

    /// Human-readable encoder name.
    fn name(&self) -> &str;

    /// Whether this encoder is currently available.
    fn is_available(&self) -> bool;
}
