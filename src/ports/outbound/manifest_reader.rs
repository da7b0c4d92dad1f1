use crate::shared::Result;
use std::path::{Path, PathBuf};

/// A manifest file that was located and read
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestFile {
    pub path: PathBuf,
    pub content: String,
}

/// ManifestReader port for locating and reading ecosystem manifests
pub trait ManifestReader {
    /// Whether any of `file_names` exists in `directory`
    fn manifest_exists(&self, directory: &Path, file_names: &[&str]) -> bool;

    /// Reads the first of `file_names` that exists in `directory`
    ///
    /// # Errors
    /// Returns `ManifestNotFound` when none exists, or `FileReadError`
    /// when the file cannot be read safely.
    fn read_manifest(&self, directory: &Path, file_names: &[&str]) -> Result<ManifestFile>;
}
