//! Remote catalog archive fetch.
//!
//! Downloads the gzip'd tarball to a temporary path and unpacks it into the
//! catalog directory. No retry, no checksum, no resume: any failure is fatal.
//! `file://` URLs are copied from the local filesystem (offline mirrors).

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use scout_core::config::CatalogConfig;
use scout_core::errors::{CatalogError, ScoutResult};
use tracing::info;

/// Fetches and unpacks the catalog archive.
#[derive(Debug, Clone)]
pub struct ArchiveFetcher {
    url: String,
    tmp_path: PathBuf,
    timeout: Option<Duration>,
}

impl ArchiveFetcher {
    pub fn new(url: impl Into<String>, tmp_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            tmp_path: tmp_path.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            url: config.archive_url.clone(),
            tmp_path: config.archive_tmp_path(),
            timeout: config.fetch_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the archive and unpack it into `dest`, creating `dest`.
    pub fn fetch_and_unpack(&self, dest: &Path) -> ScoutResult<()> {
        info!(url = %self.url, dest = %dest.display(), "catalog directory missing, fetching archive");
        self.download()?;
        std::fs::create_dir_all(dest).map_err(|e| CatalogError::UnpackFailed {
            path: dest.display().to_string(),
            reason: e.to_string(),
        })?;
        unpack_archive(&self.tmp_path, dest)?;
        info!(dest = %dest.display(), "catalog archive unpacked");
        Ok(())
    }

    /// Download the archive to the temporary path.
    fn download(&self) -> ScoutResult<()> {
        let fetch_err = |reason: String| CatalogError::FetchFailed {
            url: self.url.clone(),
            reason,
        };

        if let Some(local) = self.url.strip_prefix("file://") {
            std::fs::copy(local, &self.tmp_path).map_err(|e| fetch_err(e.to_string()))?;
            return Ok(());
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| fetch_err(e.to_string()))?;

        let mut response = client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| fetch_err(e.to_string()))?;

        let mut file = File::create(&self.tmp_path).map_err(|e| {
            fetch_err(format!(
                "cannot create {}: {e}",
                self.tmp_path.display()
            ))
        })?;
        let bytes = response
            .copy_to(&mut file)
            .map_err(|e| fetch_err(e.to_string()))?;

        info!(bytes, path = %self.tmp_path.display(), "catalog archive downloaded");
        Ok(())
    }
}

/// Unpack a `.tar.gz` archive into `dest`.
pub fn unpack_archive(archive: &Path, dest: &Path) -> ScoutResult<()> {
    let unpack_err = |reason: String| CatalogError::UnpackFailed {
        path: archive.display().to_string(),
        reason,
    };
    let file = File::open(archive).map_err(|e| unpack_err(e.to_string()))?;
    let mut tarball = tar::Archive::new(GzDecoder::new(file));
    tarball.unpack(dest).map_err(|e| unpack_err(e.to_string()))?;
    Ok(())
}
