// Single source of truth for all default values.

// --- Catalog ---
pub const DEFAULT_CATALOG_DIR: &str = "huggingface_models/model_info/";
pub const DEFAULT_CATALOG_ARCHIVE_URL: &str = "http://phontron.com/data/prompt2model/model_info.tgz";
pub const DEFAULT_CATALOG_ARCHIVE_FILE: &str = "model_info.tgz";
/// Organizations that programmatically publish models unlikely to be useful for finetuning.
pub const DEFAULT_BLOCKLIST_ORGANIZATIONS: &[&str] = &["huggingtweets"];

// --- Retrieval ---
pub const DEFAULT_SEARCH_DEPTH: usize = 5;
pub const DEFAULT_FIRST_STAGE_DEPTH: usize = 1_000;
pub const DEFAULT_SIZE_LIMIT_BYTES: u64 = 3_000_000_000; // 3 GB
pub const DEFAULT_INDEX_NAME: &str = "model-index";
pub const DEFAULT_INDEX_ROOT_DIR: &str = ".scout";

// --- Embeddings ---
pub const DEFAULT_ENCODER_MODEL: &str = "OpenMatch/cocodr-base-msmarco";
pub const DEFAULT_ENCODER_PROVIDER: &str = "hashing";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;
pub const DEFAULT_ENCODE_BATCH_SIZE: usize = 64;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1_024;

// --- Query rewrite ---
pub const DEFAULT_QUERY_REWRITE: bool = false;
pub const DEFAULT_REWRITE_PROVIDER: &str = "template";
pub const DEFAULT_REWRITE_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_REWRITE_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_REWRITE_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_REWRITE_TIMEOUT_SECS: u64 = 60;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "scout=info";
pub const DEFAULT_JSON_LOGS: bool = false;
