//! ONNX Runtime encoder.
//!
//! Loads a sentence-encoder model exported to ONNX via the `ort` crate (v2)
//! together with the `tokenizer.json` that sits next to it, mean-pools the
//! last hidden state and L2-normalizes the result.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use scout_core::config::Device;
use scout_core::errors::{EmbeddingError, ScoutResult};
use scout_core::traits::ITextEncoder;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::debug;

/// Tokenizer definition expected in the model's directory.
pub const TOKENIZER_FILE: &str = "tokenizer.json";

const MAX_SEQ_LEN: usize = 512;

/// ONNX-backed text encoder.
pub struct OnnxEncoder {
    // `Session::run` takes `&mut self`.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    dimensions: usize,
    model_name: String,
}

impl OnnxEncoder {
    /// Load the model at `model_path` on the requested device.
    ///
    /// # Errors
    /// `EmbeddingError::ModelLoadFailed` if the model file or its
    /// `tokenizer.json` is missing, or the runtime rejects either.
    pub fn load(
        model_path: &str,
        model_name: &str,
        dimensions: usize,
        device: Device,
    ) -> ScoutResult<Self> {
        let load_err = |reason: String| EmbeddingError::ModelLoadFailed {
            path: model_path.to_string(),
            reason,
        };
        if !Path::new(model_path).is_file() {
            return Err(load_err("model file not found".to_string()).into());
        }
        let tokenizer =
            Self::load_tokenizer(&Path::new(model_path).with_file_name(TOKENIZER_FILE))?;

        let builder = Session::builder()
            .map_err(|e| load_err(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| load_err(e.to_string()))?;
        let builder = Self::with_device(builder, device).map_err(load_err)?;
        let session = builder
            .commit_from_file(model_path)
            .map_err(|e| load_err(e.to_string()))?;

        debug!(model = model_name, dims = dimensions, %device, "onnx model loaded");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            dimensions,
            model_name: model_name.to_string(),
        })
    }

    fn load_tokenizer(path: &Path) -> ScoutResult<Tokenizer> {
        let load_err = |reason: String| EmbeddingError::ModelLoadFailed {
            path: path.display().to_string(),
            reason,
        };
        let mut tokenizer = Tokenizer::from_file(path).map_err(|e| load_err(e.to_string()))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_SEQ_LEN,
                ..Default::default()
            }))
            .map_err(|e| load_err(e.to_string()))?;
        Ok(tokenizer)
    }

    #[cfg(feature = "onnx-cuda")]
    fn with_device(
        builder: ort::session::builder::SessionBuilder,
        device: Device,
    ) -> Result<ort::session::builder::SessionBuilder, String> {
        use ort::execution_providers::CUDAExecutionProvider;
        match device {
            Device::Cpu => Ok(builder),
            Device::Cuda => builder
                .with_execution_providers([CUDAExecutionProvider::default().build()])
                .map_err(|e| e.to_string()),
        }
    }

    #[cfg(not(feature = "onnx-cuda"))]
    fn with_device(
        builder: ort::session::builder::SessionBuilder,
        device: Device,
    ) -> Result<ort::session::builder::SessionBuilder, String> {
        if device == Device::Cuda {
            tracing::warn!("built without `onnx-cuda`, running the encoder on cpu");
        }
        Ok(builder)
    }

    fn infer(&self, text: &str) -> ScoutResult<Vec<f32>> {
        let encoding =
            self.tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tokenization failed: {e}"),
                })?;
        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let seq_len = input_ids.len() as i64;

        let tensor_err = |e: ort::Error| EmbeddingError::InferenceFailed {
            reason: format!("tensor creation error: {e}"),
        };
        let ids = Tensor::from_array((vec![1i64, seq_len], input_ids)).map_err(tensor_err)?;
        let mask = Tensor::from_array((vec![1i64, seq_len], attention_mask)).map_err(tensor_err)?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;
        let outputs = session
            .run(ort::inputs![ids, mask])
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: "model produced no outputs".to_string(),
            })?;
        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        let mut pooled = match shape.len() {
            // [1, seq, hidden]
            3 => {
                let seq = shape[1] as usize;
                let hidden = shape[2] as usize;
                let mut acc = vec![0.0f32; hidden];
                for row in data.chunks_exact(hidden).take(seq) {
                    for (a, v) in acc.iter_mut().zip(row) {
                        *a += v;
                    }
                }
                if seq > 0 {
                    acc.iter_mut().for_each(|a| *a /= seq as f32);
                }
                acc
            }
            // [1, hidden], already pooled
            2 => data[..shape[1] as usize].to_vec(),
            _ => {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("unexpected output shape: {shape:?}"),
                }
                .into())
            }
        };

        if pooled.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: pooled.len(),
            }
            .into());
        }

        let norm: f32 = pooled.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            pooled.iter_mut().for_each(|v| *v /= norm);
        }
        Ok(pooled)
    }
}

impl ITextEncoder for OnnxEncoder {
    fn embed(&self, text: &str) -> ScoutResult<Vec<f32>> {
        self.infer(text)
    }

    fn embed_batch(&self, texts: &[String]) -> ScoutResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.infer(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
