//! In-memory port implementations shared by the use case tests

use crate::ports::outbound::{DirectoryWalker, ManifestFile, ManifestReader, WalkFilter};
use crate::shared::error::BomError;
use crate::shared::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Serves manifests from a map keyed by full path
#[derive(Default)]
pub struct InMemoryReader {
    files: HashMap<PathBuf, String>,
}

impl InMemoryReader {
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl ManifestReader for InMemoryReader {
    fn manifest_exists(&self, directory: &Path, file_names: &[&str]) -> bool {
        file_names
            .iter()
            .any(|name| self.files.contains_key(&directory.join(name)))
    }

    fn read_manifest(&self, directory: &Path, file_names: &[&str]) -> Result<ManifestFile> {
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
                    suggestion: "not in memory".to_string(),
                }
                .into()
            })
    }
}

/// Yields every known directory below the root that the filter accepts
#[derive(Default)]
pub struct ListWalker {
    pub directories: Vec<PathBuf>,
}

impl ListWalker {
    pub fn new(directories: &[&str]) -> Self {
        Self {
            directories: directories.iter().map(PathBuf::from).collect(),
        }
    }
}

impl DirectoryWalker for ListWalker {
    fn walk(&self, root: &Path, filter: &WalkFilter) -> Result<Vec<PathBuf>> {
        Ok(self
            .directories
            .iter()
            .filter(|directory| directory.starts_with(root))
            .filter(|directory| {
                !directory
                    .ancestors()
                    .take_while(|ancestor| ancestor.starts_with(root))
                    .any(|ancestor| filter.excludes(ancestor))
            })
            .cloned()
            .collect())
    }
}
