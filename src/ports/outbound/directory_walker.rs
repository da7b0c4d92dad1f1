use crate::shared::Result;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Directories a walk must not enter
#[derive(Debug, Clone, Default)]
pub struct WalkFilter {
    /// Matched against the full path of every directory, the root included
    pub exclude: Option<Regex>,
    /// Directory names that are never entered, e.g. `node_modules`
    pub skipped_names: Vec<&'static str>,
}

impl WalkFilter {
    pub fn excludes(&self, path: &Path) -> bool {
        let excluded_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.skipped_names.contains(&name));
        let excluded_path = self
            .exclude
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&path.to_string_lossy()));
        excluded_name || excluded_path
    }
}

/// DirectoryWalker port for enumerating a project tree
pub trait DirectoryWalker {
    /// Lists `root` and every directory below it, depth-first in name order.
    ///
    /// A directory rejected by `filter` is left out together with its
    /// whole subtree. Unreadable subdirectories are skipped; an unreadable
    /// `root` is an error.
    fn walk(&self, root: &Path, filter: &WalkFilter) -> Result<Vec<PathBuf>>;
}
