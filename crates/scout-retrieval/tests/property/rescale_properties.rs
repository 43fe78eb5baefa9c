//! Property tests for rescoring and ranking.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use scout_core::config::{Backend, RetrievalConfig};
use scout_core::errors::ScoutResult;
use scout_core::models::{Candidate, Catalog, ModelRecord, PromptSpec};
use scout_core::traits::IFirstStageRetriever;
use scout_retrieval::{ModelSelector, ScoreRescaler};

struct Fixed(Vec<Candidate>, PathBuf);

impl IFirstStageRetriever for Fixed {
    fn backend(&self) -> Backend {
        Backend::Sparse
    }
    fn index_path(&self) -> &Path {
        &self.1
    }
    fn ensure_index(&self, _: &Catalog) -> ScoutResult<()> {
        Ok(())
    }
    fn retrieve_candidates(&self, _: &str, _: &Catalog, depth: usize) -> ScoutResult<Vec<Candidate>> {
        Ok(self.0.iter().take(depth).cloned().collect())
    }
}

/// (size_bytes, downloads, raw score) per model.
fn models() -> impl Strategy<Value = Vec<(u64, u64, f64)>> {
    prop::collection::vec((1u64..10_000, 0u64..10_000_000, -10.0f64..10.0), 1..40)
}

proptest! {
    #[test]
    fn prop_oversized_is_negative_infinity(size in 0u64..u64::MAX, limit in 0u64..u64::MAX, raw in -1e6f64..1e6) {
        let record = ModelRecord::new("m", "d", size, 3);
        let score = ScoreRescaler::new(limit).rescale(&record, raw);
        if size > limit {
            prop_assert_eq!(score, f64::NEG_INFINITY);
        } else {
            prop_assert!(score.is_finite());
        }
    }

    #[test]
    fn prop_rescale_preserves_sign(downloads in 0u64..u64::MAX, raw in -1e6f64..1e6) {
        let record = ModelRecord::new("m", "d", 1, downloads);
        let score = ScoreRescaler::new(u64::MAX).rescale(&record, raw);
        prop_assert!(ScoreRescaler::log_popularity(downloads) > 0.0);
        prop_assert_eq!(score.signum(), raw.signum());
    }

    #[test]
    fn prop_selection_sorted_bounded_and_within_limit(
        specs in models(),
        depth in 1usize..20,
        limit in 0u64..10_000,
    ) {
        let records: Vec<ModelRecord> = specs
            .iter()
            .enumerate()
            .map(|(i, (size, dl, _))| ModelRecord::new(format!("m{i}"), "d", *size, *dl))
            .collect();
        let hits: Vec<Candidate> = specs
            .iter()
            .enumerate()
            .map(|(i, (_, _, raw))| Candidate::new(format!("m{i}"), *raw))
            .collect();
        let eligible = specs.iter().filter(|(size, _, _)| *size <= limit).count();

        let config = RetrievalConfig {
            search_depth: depth,
            size_limit_bytes: limit,
            ..Default::default()
        };
        let selector = ModelSelector::with_parts(
            Catalog::new(records).unwrap(),
            Box::new(Fixed(hits, PathBuf::from("/fixed"))),
            None,
            &config,
        );

        match selector.rank(&PromptSpec::new("q")) {
            Ok(ranked) => {
                prop_assert_eq!(ranked.len(), depth.min(eligible));
                for pair in ranked.windows(2) {
                    prop_assert!(pair[0].score >= pair[1].score);
                }
                for s in &ranked {
                    prop_assert!(s.record.size_bytes <= limit);
                }
            }
            Err(e) => {
                prop_assert!(e.is_no_results());
                prop_assert_eq!(eligible, 0);
            }
        }
    }
}
