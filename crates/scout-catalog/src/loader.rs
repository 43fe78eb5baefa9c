//! Catalog loader: directory of per-model JSON records → ordered `Catalog`.
//!
//! Entries are enumerated in lexicographic file-name order so that the
//! catalog order, which the dense index is aligned to, is the same on every
//! platform. Skips are silent (debug-level logs only); a record that cannot
//! be parsed aborts the whole load.

use std::path::{Path, PathBuf};

use scout_core::config::CatalogConfig;
use scout_core::constants::HIDDEN_ENTRY_PREFIX;
use scout_core::errors::{CatalogError, ScoutResult};
use scout_core::models::{Catalog, ModelRecord};
use serde::Deserialize;
use tracing::{debug, info};

use crate::blocklist::OrgBlocklist;
use crate::fetch::ArchiveFetcher;

/// On-disk record format. Every field is optional here so that the skip
/// rules, not serde, decide what happens to incomplete records.
#[derive(Debug, Deserialize)]
struct RawRecord {
    pretrained_model_name: Option<String>,
    description: Option<String>,
    size_bytes: Option<u64>,
    downloads: Option<u64>,
}

/// Per-reason counts from one catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub kept: usize,
    pub skipped_hidden: usize,
    pub skipped_non_file: usize,
    pub skipped_empty: usize,
    pub skipped_blocked: usize,
    pub skipped_incomplete: usize,
}

impl LoadReport {
    pub fn skipped(&self) -> usize {
        self.skipped_hidden
            + self.skipped_non_file
            + self.skipped_empty
            + self.skipped_blocked
            + self.skipped_incomplete
    }
}

/// Loads the catalog described by a `CatalogConfig`.
pub struct CatalogLoader {
    dir: PathBuf,
    blocklist: OrgBlocklist,
    fetcher: ArchiveFetcher,
}

impl CatalogLoader {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
            blocklist: OrgBlocklist::new(&config.blocklist_organizations),
            fetcher: ArchiveFetcher::from_config(config),
        }
    }

    /// Replace the archive fetcher (e.g. to point at a mirror).
    pub fn with_fetcher(mut self, fetcher: ArchiveFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the catalog, fetching the archive first if the directory is absent.
    pub fn load(&self) -> ScoutResult<Catalog> {
        self.load_with_report().map(|(catalog, _)| catalog)
    }

    /// Load the catalog and report how many entries each skip rule removed.
    pub fn load_with_report(&self) -> ScoutResult<(Catalog, LoadReport)> {
        let _span = scout_core::catalog_span!(self.dir.display()).entered();
        if !self.dir.exists() {
            self.fetcher.fetch_and_unpack(&self.dir)?;
        }
        load_catalog_dir(&self.dir, &self.blocklist)
    }
}

/// Load every record in `dir`, applying the skip rules.
pub fn load_catalog_dir(
    dir: &Path,
    blocklist: &OrgBlocklist,
) -> ScoutResult<(Catalog, LoadReport)> {
    let read_err = |path: &Path, e: std::io::Error| CatalogError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| read_err(dir, e))? {
        let entry = entry.map_err(|e| read_err(dir, e))?;
        entries.push(entry);
    }
    entries.sort_by_key(|e| e.file_name());

    let mut report = LoadReport::default();
    let mut records = Vec::new();

    for entry in entries {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        if file_name.starts_with(HIDDEN_ENTRY_PREFIX) {
            report.skipped_hidden += 1;
            continue;
        }
        if !path.is_file() {
            debug!(entry = %file_name, "skipping non-file catalog entry");
            report.skipped_non_file += 1;
            continue;
        }
        let content = std::fs::read_to_string(&path).map_err(|e| read_err(&path, e))?;
        if content.is_empty() {
            report.skipped_empty += 1;
            continue;
        }
        if blocklist.is_blocked(&file_name) {
            report.skipped_blocked += 1;
            continue;
        }

        let raw: RawRecord =
            serde_json::from_str(&content).map_err(|e| CatalogError::MalformedRecord {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        match parse_record(raw, &path, blocklist)? {
            Parsed::Kept(record) => {
                records.push(record);
                report.kept += 1;
            }
            Parsed::Blocked(name) => {
                debug!(model = %name, "skipping blocklisted model");
                report.skipped_blocked += 1;
            }
            Parsed::Incomplete => {
                debug!(entry = %file_name, "skipping record without size or description");
                report.skipped_incomplete += 1;
            }
        }
    }

    let catalog = Catalog::new(records)?;
    info!(
        dir = %dir.display(),
        models = report.kept,
        skipped = report.skipped(),
        "catalog loaded"
    );
    Ok((catalog, report))
}

enum Parsed {
    Kept(ModelRecord),
    Blocked(String),
    Incomplete,
}

fn parse_record(raw: RawRecord, path: &Path, blocklist: &OrgBlocklist) -> ScoutResult<Parsed> {
    let size_bytes = raw.size_bytes.unwrap_or(0);
    if size_bytes == 0 {
        return Ok(Parsed::Incomplete);
    }
    let Some(description) = raw.description else {
        return Ok(Parsed::Incomplete);
    };
    let name = raw
        .pretrained_model_name
        .ok_or_else(|| CatalogError::MalformedRecord {
            path: path.display().to_string(),
            reason: "missing field `pretrained_model_name`".to_string(),
        })?;
    if blocklist.is_blocked(&name) {
        return Ok(Parsed::Blocked(name));
    }

    Ok(Parsed::Kept(ModelRecord {
        name,
        description,
        size_bytes,
        num_downloads: raw.downloads.unwrap_or(0),
    }))
}
