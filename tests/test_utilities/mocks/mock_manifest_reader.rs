use bomgraph::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving files from memory
#[derive(Default)]
pub struct MockManifestReader {
    files: HashMap<PathBuf, String>,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn manifest_exists(&self, directory: &Path, file_names: &[&str]) -> bool {
        file_names
            .iter()
            .any(|name| self.files.contains_key(&directory.join(name)))
    }

    fn read_manifest(&self, directory: &Path, file_names: &[&str]) -> Result<ManifestFile> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure");
        }
        file_names
            .iter()
            .map(|name| directory.join(name))
            .find_map(|path| {
                self.files.get(&path).map(|content| ManifestFile {
                    path: path.clone(),
                    content: content.clone(),
                })
            })
            .ok_or_else(|| {
                BomError::ManifestNotFound {
                    path: directory.join(file_names[0]),
                    suggestion: "Mock manifest not registered".to_string(),
                }
                .into()
            })
    }
}
