//! Test fixture loader for Scout catalog datasets and integration scenarios.
//!
//! Provides fixture path resolution plus helpers that write catalog
//! directories of per-model JSON records for loader and selector tests.

use serde::de::DeserializeOwned;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file or directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Copy a fixture catalog directory (e.g. `"catalog/basic"`) into `dest`,
/// hidden and empty files included.
pub fn copy_fixture_catalog(subdir: &str, dest: &Path) {
    let src = fixtures_root().join(subdir);
    std::fs::create_dir_all(dest)
        .unwrap_or_else(|e| panic!("Failed to create {}: {}", dest.display(), e));
    let entries = std::fs::read_dir(&src)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", src.display(), e));
    for entry in entries {
        let entry = entry.expect("directory entry");
        let target = dest.join(entry.file_name());
        std::fs::copy(entry.path(), &target)
            .unwrap_or_else(|e| panic!("Failed to copy to {}: {}", target.display(), e));
    }
}

/// Write one catalog record file in the on-disk record format.
pub fn write_record(
    dir: &Path,
    file_name: &str,
    name: &str,
    description: &str,
    size_bytes: u64,
    downloads: u64,
) -> PathBuf {
    write_raw_record(
        dir,
        file_name,
        &json!({
            "pretrained_model_name": name,
            "description": description,
            "size_bytes": size_bytes,
            "downloads": downloads,
        })
        .to_string(),
    )
}

/// Write an arbitrary file into a catalog directory.
pub fn write_raw_record(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    std::fs::create_dir_all(dir)
        .unwrap_or_else(|e| panic!("Failed to create {}: {}", dir.display(), e));
    let path = dir.join(file_name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}

/// Names of the records the `catalog/basic` fixture keeps after filtering,
/// in catalog order.
pub const BASIC_CATALOG_NAMES: &[&str] = &[
    "bert-base-uncased",
    "facebook/bart-large-cnn",
    "gpt2-xl",
    "cardiffnlp/twitter-roberta-base-sentiment",
    "t5-small",
];
