use serde::{Deserialize, Serialize};

use super::ModelRecord;

/// First-stage hit: a model name and its raw similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub raw_score: f64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, raw_score: f64) -> Self {
        Self {
            name: name.into(),
            raw_score,
        }
    }
}

/// A catalog record paired with its rescaled score for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredModel {
    pub record: ModelRecord,
    /// Popularity/size adjusted score; negative infinity marks a hard exclusion.
    pub score: f64,
    /// Raw first-stage similarity.
    pub raw_score: f64,
}
