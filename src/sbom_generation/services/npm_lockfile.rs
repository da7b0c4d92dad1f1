use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One installation of a package, keyed by its install name in the parent scope
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstalledPackage {
    pub version: String,
    pub dev: bool,
    /// Names this installation requires; version ranges are not kept
    pub requires: Vec<String>,
    /// Packages installed in this package's own `node_modules`
    pub installed: BTreeMap<String, InstalledPackage>,
}

/// Normalized view of `package-lock.json` / `npm-shrinkwrap.json`
///
/// Both the nested `dependencies` layout and the flat `packages` layout
/// are folded into the same install tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NpmLockfile {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Requirements of the project itself, as recorded by the lockfile
    pub root_requires: Vec<String>,
    pub installed: BTreeMap<String, InstalledPackage>,
}

/// The parts of `package.json` that seed the project's requirements
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Names from `dependencies` followed by `devDependencies`
    pub fn requires(&self) -> Vec<String> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct RawLockfile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    dependencies: BTreeMap<String, RawDependency>,
    #[serde(default)]
    packages: BTreeMap<String, RawPackage>,
}

/// Entry of the nested `dependencies` map (lockfile v1, also kept by v2)
#[derive(Debug, Deserialize)]
struct RawDependency {
    #[serde(default)]
    version: String,
    #[serde(default)]
    dev: bool,
    #[serde(default)]
    requires: BTreeMap<String, String>,
    #[serde(default)]
    dependencies: BTreeMap<String, RawDependency>,
}

/// Entry of the flat `packages` map (lockfile v2 and v3)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPackage {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: String,
    #[serde(default)]
    dev: bool,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default)]
    optional_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    peer_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, String>,
}

const NODE_MODULES: &str = "node_modules/";

/// Parses an npm lockfile into its install tree
pub fn parse_lockfile(content: &str) -> Result<NpmLockfile> {
    let mut raw: RawLockfile =
        serde_json::from_str(content).context("Failed to parse npm lockfile")?;

    let mut lockfile = NpmLockfile {
        name: non_empty(raw.name),
        version: non_empty(raw.version),
        ..NpmLockfile::default()
    };

    // The "" entry describes the project in both layouts of a v2 lockfile
    if let Some(project) = raw.packages.remove("") {
        lockfile.name = lockfile.name.or(project.name);
        lockfile.version = lockfile.version.or(non_empty(project.version));
        lockfile.root_requires = project
            .dependencies
            .into_keys()
            .chain(project.dev_dependencies.into_keys())
            .collect();
    }

    if !raw.dependencies.is_empty() {
        lockfile.installed = raw
            .dependencies
            .into_iter()
            .map(|(name, dependency)| (name, from_nested(dependency)))
            .collect();
        return Ok(lockfile);
    }

    // BTreeMap order puts every parent install path before its children
    for (key, package) in raw.packages {
        let Some(install_path) = key.strip_prefix(NODE_MODULES) else {
            tracing::trace!("ignoring workspace entry '{}'", key);
            continue;
        };
        let segments: Vec<&str> = install_path.split("/node_modules/").collect();
        let Some((name, parents)) = segments.split_last() else {
            continue;
        };

        match install_scope(&mut lockfile.installed, parents) {
            Some(scope) => {
                scope.insert(name.to_string(), from_flat(package));
            }
            None => tracing::debug!("no parent installation for '{}'", key),
        }
    }

    Ok(lockfile)
}

/// Parses `package.json`
pub fn parse_manifest(content: &str) -> Result<PackageManifest> {
    serde_json::from_str(content).context("Failed to parse package.json")
}

fn install_scope<'a>(
    root: &'a mut BTreeMap<String, InstalledPackage>,
    parents: &[&str],
) -> Option<&'a mut BTreeMap<String, InstalledPackage>> {
    let mut scope = root;
    for parent in parents {
        scope = &mut scope.get_mut(*parent)?.installed;
    }
    Some(scope)
}

fn from_nested(dependency: RawDependency) -> InstalledPackage {
    InstalledPackage {
        version: dependency.version,
        dev: dependency.dev,
        requires: dependency.requires.into_keys().collect(),
        installed: dependency
            .dependencies
            .into_iter()
            .map(|(name, nested)| (name, from_nested(nested)))
            .collect(),
    }
}

fn from_flat(package: RawPackage) -> InstalledPackage {
    let mut requires: Vec<String> = package.dependencies.into_keys().collect();
    for name in package
        .optional_dependencies
        .into_keys()
        .chain(package.peer_dependencies.into_keys())
    {
        if !requires.contains(&name) {
            requires.push(name);
        }
    }

    InstalledPackage {
        version: package.version,
        dev: package.dev,
        requires,
        installed: BTreeMap::new(),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
