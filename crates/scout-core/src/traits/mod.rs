pub mod encoder;
pub mod first_stage;
pub mod model_retriever;
pub mod rewriter;

pub use encoder::ITextEncoder;
pub use first_stage::IFirstStageRetriever;
pub use model_retriever::IModelRetriever;
pub use rewriter::IQueryRewriter;
