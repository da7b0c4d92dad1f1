use crate::ports::outbound::{DirectoryWalker, WalkFilter};
use crate::shared::error::BomError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// FileSystemWalker adapter enumerating project directories with `walkdir`
///
/// Symbolic links are not followed.
pub struct FileSystemWalker;

impl FileSystemWalker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryWalker for FileSystemWalker {
    fn walk(&self, root: &Path, filter: &WalkFilter) -> Result<Vec<PathBuf>> {
        if let Err(e) = std::fs::read_dir(root) {
            return Err(BomError::InvalidProjectPath {
                path: root.to_path_buf(),
                reason: e.to_string(),
            }
            .into());
        }

        let mut directories = Vec::new();
        let entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if !entry.file_type().is_dir() {
                    return false;
                }
                let skipped = filter.excludes(entry.path());
                if skipped {
                    tracing::debug!("skipping '{}'", entry.path().display());
                }
                !skipped
            });

        for entry in entries {
            match entry {
                Ok(entry) => directories.push(entry.into_path()),
                Err(e) => tracing::warn!("cannot read directory: {}", e),
            }
        }

        Ok(directories)
    }
}
