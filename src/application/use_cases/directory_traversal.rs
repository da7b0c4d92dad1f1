use crate::ports::outbound::{DirectoryWalker, WalkFilter};
use crate::sbom_generation::domain::Component;
use crate::shared::error::BomError;
use crate::shared::Result;
use std::path::Path;

/// How a generator visits the project tree
#[derive(Debug, Clone, Default)]
pub struct ScanSettings {
    pub recurse: bool,
    /// Only consulted when `recurse` is set
    pub filter: WalkFilter,
}

/// DirectoryTraversal - runs a per-directory generation over a project tree
///
/// Without recursion the project path is processed alone and its error is
/// returned. With recursion every directory the walker yields is processed
/// in turn; a directory without a manifest is skipped quietly, any other
/// failure is logged and skipped. Results are concatenated in walk order.
pub struct DirectoryTraversal;

impl DirectoryTraversal {
    pub fn run<W, F>(
        walker: &W,
        settings: &ScanSettings,
        root: &Path,
        mut generate: F,
    ) -> Result<Vec<Component>>
    where
        W: DirectoryWalker,
        F: FnMut(&Path) -> Result<Vec<Component>>,
    {
        if !settings.recurse {
            return generate(root);
        }

        let directories = walker.walk(root, &settings.filter)?;
        tracing::debug!(
            "scanning {} director(ies) below '{}'",
            directories.len(),
            root.display()
        );

        let mut components = Vec::new();
        for directory in directories {
            match generate(&directory) {
                Ok(found) => components.extend(found),
                Err(err) if is_missing_manifest(&err) => {
                    tracing::debug!("no manifest in '{}'", directory.display());
                }
                Err(err) => {
                    tracing::warn!("skipping '{}': {:#}", directory.display(), err);
                }
            }
        }
        Ok(components)
    }
}

fn is_missing_manifest(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<BomError>(),
        Some(BomError::ManifestNotFound { .. })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct FixedWalker(Vec<PathBuf>);

    impl DirectoryWalker for FixedWalker {
        fn walk(&self, _root: &Path, _filter: &WalkFilter) -> Result<Vec<PathBuf>> {
            Ok(self.0.clone())
        }
    }

    struct FailingWalker;

    impl DirectoryWalker for FailingWalker {
        fn walk(&self, root: &Path, _filter: &WalkFilter) -> Result<Vec<PathBuf>> {
            Err(BomError::InvalidProjectPath {
                path: root.to_path_buf(),
                reason: "unreadable".to_string(),
            }
            .into())
        }
    }

    fn recursive() -> ScanSettings {
        ScanSettings {
            recurse: true,
            ..ScanSettings::default()
        }
    }

    fn component(name: &str) -> Vec<Component> {
        vec![Component::library("", name, "1.0.0")]
    }

    #[test]
    fn test_single_directory_returns_its_error() {
        let walker = FixedWalker(vec![]);
        let result = DirectoryTraversal::run(&walker, &ScanSettings::default(), Path::new("p"), |_| {
            Err(BomError::ManifestNotFound {
                path: PathBuf::from("p/Podfile.lock"),
                suggestion: String::new(),
            }
            .into())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_single_directory_does_not_walk() {
        let walker = FailingWalker;
        let components =
            DirectoryTraversal::run(&walker, &ScanSettings::default(), Path::new("p"), |path| {
                Ok(component(&path.display().to_string()))
            })
            .unwrap();
        assert_eq!(components[0].name, "p");
    }

    #[test]
    fn test_recursive_concatenates_in_walk_order() {
        let walker = FixedWalker(vec![
            PathBuf::from("root"),
            PathBuf::from("root/a"),
            PathBuf::from("root/b"),
        ]);
        let visited = RefCell::new(Vec::new());

        let components = DirectoryTraversal::run(&walker, &recursive(), Path::new("root"), |path| {
            visited.borrow_mut().push(path.to_path_buf());
            Ok(component("same"))
        })
        .unwrap();

        assert_eq!(visited.borrow().len(), 3);
        assert_eq!(components.len(), 3);
    }

    #[test]
    fn test_recursive_skips_failing_directories() {
        let walker = FixedWalker(vec![
            PathBuf::from("root"),
            PathBuf::from("root/broken"),
            PathBuf::from("root/ok"),
        ]);

        let components = DirectoryTraversal::run(&walker, &recursive(), Path::new("root"), |path| {
            match path.file_name().and_then(|n| n.to_str()) {
                Some("root") => Err(BomError::ManifestNotFound {
                    path: path.join("package-lock.json"),
                    suggestion: String::new(),
                }
                .into()),
                Some("broken") => Err(BomError::ManifestParseError {
                    path: path.join("package-lock.json"),
                    details: "truncated".to_string(),
                }
                .into()),
                _ => Ok(component("ok")),
            }
        })
        .unwrap();

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name, "ok");
    }

    #[test]
    fn test_recursive_unreadable_root_is_an_error() {
        let result =
            DirectoryTraversal::run(&FailingWalker, &recursive(), Path::new("root"), |_| {
                Ok(Vec::new())
            });
        assert!(result.is_err());
    }
}
