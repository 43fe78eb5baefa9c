//! Feature-hashing encoder.
//!
//! Maps terms into fixed-dimension buckets with a signed FNV-1a hash and
//! weights them by term frequency. No model files, no network: this is the
//! default encoder and the fallback when ONNX is unavailable.

use std::collections::HashMap;

use scout_core::errors::ScoutResult;
use scout_core::text::tokenize;
use scout_core::traits::ITextEncoder;

/// Deterministic, always-available encoder.
///
/// Output vectors are L2-normalized, so the dot product of two encodings is
/// their cosine similarity. Text with no terms encodes to the zero vector.
#[derive(Debug, Clone)]
pub struct HashingEncoder {
    dimensions: usize,
}

impl HashingEncoder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn fnv1a(term: &str) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        h
    }

    fn encode(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        if self.dimensions == 0 {
            return vec;
        }
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in tf {
            let h = Self::fnv1a(term);
            let bucket = (h % self.dimensions as u64) as usize;
            // Top bit picks the sign so collisions tend to cancel.
            let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
            // Longer terms are rarer; weight them up a little.
            let weight = 1.0 + (term.len() as f32).ln();
            vec[bucket] += sign * weight * count / total;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl ITextEncoder for HashingEncoder {
    fn embed(&self, text: &str) -> ScoutResult<Vec<f32>> {
        Ok(self.encode(text))
    }

    fn embed_batch(&self, texts: &[String]) -> ScoutResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.encode(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn blank_text_is_zero_vector() {
        let e = HashingEncoder::new(64);
        let v = e.embed(" - ").unwrap();
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn unit_norm() {
        let e = HashingEncoder::new(256);
        let v = e.embed("abstractive news summarization model").unwrap();
        let norm = dot(&v, &v).sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn deterministic_across_instances() {
        let a = HashingEncoder::new(128).embed("sentiment of tweets").unwrap();
        let b = HashingEncoder::new(128).embed("sentiment of tweets").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_matches_single() {
        let e = HashingEncoder::new(128);
        let texts = vec!["translate english".to_string(), "classify images".to_string()];
        let batch = e.embed_batch(&texts).unwrap();
        for (text, row) in texts.iter().zip(&batch) {
            assert_eq!(&e.embed(text).unwrap(), row);
        }
    }

    #[test]
    fn overlapping_texts_score_higher() {
        let e = HashingEncoder::new(512);
        let query = e.embed("summarize news articles").unwrap();
        let near = e.embed("model for news summarization of articles").unwrap();
        let far = e.embed("speech recognition for audio").unwrap();
        assert!(dot(&query, &near) > dot(&query, &far));
    }

    #[test]
    fn zero_dimensions_does_not_panic() {
        let e = HashingEncoder::new(0);
        assert!(e.embed("anything").unwrap().is_empty());
    }
}
