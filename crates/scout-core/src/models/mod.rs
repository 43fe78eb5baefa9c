pub mod candidate;
pub mod catalog;
pub mod model_record;
pub mod prompt;

pub use candidate::{Candidate, ScoredModel};
pub use catalog::Catalog;
pub use model_record::ModelRecord;
pub use prompt::PromptSpec;
