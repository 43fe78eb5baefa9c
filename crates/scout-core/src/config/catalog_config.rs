use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Catalog loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory of per-model JSON records.
    pub dir: String,
    /// Archive fetched when `dir` does not exist.
    pub archive_url: String,
    /// Where the fetched archive is written before unpacking.
    /// Defaults to `<tmp>/model_info.tgz`.
    pub archive_tmp_path: Option<String>,
    /// Organization prefixes whose models are excluded.
    pub blocklist_organizations: Vec<String>,
    /// Timeout for the archive fetch. `None` waits indefinitely.
    pub fetch_timeout_secs: Option<u64>,
}

impl CatalogConfig {
    /// Resolved temporary path for the downloaded archive.
    pub fn archive_tmp_path(&self) -> PathBuf {
        self.archive_tmp_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(defaults::DEFAULT_CATALOG_ARCHIVE_FILE))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: defaults::DEFAULT_CATALOG_DIR.to_string(),
            archive_url: defaults::DEFAULT_CATALOG_ARCHIVE_URL.to_string(),
            archive_tmp_path: None,
            blocklist_organizations: defaults::DEFAULT_BLOCKLIST_ORGANIZATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fetch_timeout_secs: None,
        }
    }
}
