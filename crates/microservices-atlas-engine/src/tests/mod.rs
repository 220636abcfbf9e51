//! Shared helpers for unit tests across the engine.

use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Smallest valid page definition with the given slug
pub fn minimal_page(slug: &str) -> String {
    format!("slug = \"{slug}\"\ntitle = \"Page {slug}\"\n")
}
