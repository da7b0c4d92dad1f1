use crate::ports::outbound::{ManifestFile, ManifestReader};
use crate::shared::error::BomError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading manifests from disk
///
/// Manifests go through the regular-file and size checks before being read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn manifest_exists(&self, directory: &Path, file_names: &[&str]) -> bool {
        file_names
            .iter()
            .any(|name| directory.join(name).symlink_metadata().is_ok())
    }

    fn read_manifest(&self, directory: &Path, file_names: &[&str]) -> Result<ManifestFile> {
        let Some(path) = file_names
            .iter()
            .map(|name| directory.join(name))
            .find(|path| path.symlink_metadata().is_ok())
        else {
            return Err(BomError::ManifestNotFound {
                path: directory.join(file_names.first().copied().unwrap_or_default()),
                suggestion: format!(
                    "None of {} exists in \"{}\".\n   \
                     Run the package manager's install step first, or point at the project directory.",
                    file_names.join(", "),
                    directory.display()
                ),
            }
            .into());
        };

        let description = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = read_regular_file(&path, &description)?;
        tracing::info!("read '{}' in '{}'", description, directory.display());

        Ok(ManifestFile { path, content })
    }
}
