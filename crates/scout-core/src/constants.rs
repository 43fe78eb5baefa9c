/// Scout system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project-level config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "scout.toml";

/// Environment variable read by `init_tracing` for filter directives.
pub const LOG_ENV_VAR: &str = "SCOUT_LOG";

/// Environment variable overriding the index root directory.
pub const HOME_ENV_VAR: &str = "SCOUT_HOME";

/// Sub-directory of the index root holding sparse index collections.
pub const COLLECTIONS_DIR: &str = "collections";

/// File name of a persisted sparse index inside its collection directory.
pub const SPARSE_INDEX_FILE: &str = "bm25.sqlite";

/// Catalog entries whose name starts with this marker are skipped.
pub const HIDDEN_ENTRY_PREFIX: char = '.';
