use bomgraph::prelude::*;
use std::path::{Path, PathBuf};

/// Mock DirectoryWalker over a fixed list of directories
#[derive(Default)]
pub struct MockDirectoryWalker {
    pub directories: Vec<PathBuf>,
}

impl MockDirectoryWalker {
    pub fn new(directories: &[&str]) -> Self {
        Self {
            directories: directories.iter().map(PathBuf::from).collect(),
        }
    }
}

impl DirectoryWalker for MockDirectoryWalker {
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
