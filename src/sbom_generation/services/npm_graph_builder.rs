use super::npm_lockfile::{InstalledPackage, NpmLockfile, PackageManifest};
use crate::sbom_generation::domain::{ComponentNode, DependencyGraph, Ecosystem, NodeId, PurlType};
use std::collections::BTreeMap;

/// An installation location in the `node_modules` hierarchy.
///
/// Identical `name@version` copies at different locations share one graph
/// node, but each location resolves its requirements in its own scope.
#[derive(Debug)]
struct Placement {
    node: NodeId,
    parent: Option<usize>,
    requires: Vec<String>,
    installed: BTreeMap<String, usize>,
}

/// NpmGraphBuilder service for turning an npm install tree into a resolved graph
///
/// Requirements are resolved with Node's module lookup: the nearest
/// `node_modules` that contains the name wins, walking up towards the
/// project root.
pub struct NpmGraphBuilder {
    include_dev: bool,
}

impl NpmGraphBuilder {
    pub fn new(include_dev: bool) -> Self {
        Self { include_dev }
    }

    /// Builds and resolves the graph of one project
    ///
    /// # Arguments
    /// * `project_path` - Directory of the project; names the root when the lockfile does not
    /// * `lockfile` - Parsed lockfile
    /// * `manifest` - Parsed `package.json`, if one could be read
    pub fn build(
        &self,
        project_path: &str,
        lockfile: &NpmLockfile,
        manifest: Option<&PackageManifest>,
    ) -> DependencyGraph {
        let mut graph = DependencyGraph::new(Ecosystem::Npm);

        let root_name = lockfile.name.as_deref().unwrap_or(project_path);
        let root_version = lockfile.version.as_deref().unwrap_or("unknown");
        let root_requires = manifest
            .map(PackageManifest::requires)
            .unwrap_or_else(|| lockfile.root_requires.clone());

        let (group, name) = split_package_name(root_name);
        let root = graph.insert(
            ComponentNode::root(PurlType::Npm, group, name, root_version)
                .with_requires(root_requires.iter().cloned()),
        );

        let mut placements = vec![Placement {
            node: root,
            parent: None,
            requires: root_requires,
            installed: BTreeMap::new(),
        }];
        self.place(&mut graph, &mut placements, 0, &lockfile.installed);

        resolve(&mut graph, &placements);
        graph
    }

    fn place(
        &self,
        graph: &mut DependencyGraph,
        placements: &mut Vec<Placement>,
        parent: usize,
        packages: &BTreeMap<String, InstalledPackage>,
    ) {
        for (install_name, package) in packages {
            if package.dev && !self.include_dev {
                tracing::trace!("skipping dev dependency '{}'", install_name);
                continue;
            }

            let (group, name) = split_package_name(install_name);
            let version = if package.version.is_empty() {
                "unknown"
            } else {
                package.version.as_str()
            };
            let node = graph.insert(
                ComponentNode::package(PurlType::Npm, group, name, version)
                    .with_requires(package.requires.iter().cloned()),
            );
            graph.add_subcomponent(placements[parent].node, node);

            let index = placements.len();
            placements.push(Placement {
                node,
                parent: Some(parent),
                requires: package.requires.clone(),
                installed: BTreeMap::new(),
            });
            placements[parent]
                .installed
                .insert(install_name.clone(), index);

            self.place(graph, placements, index, &package.installed);
        }
    }
}

fn resolve(graph: &mut DependencyGraph, placements: &[Placement]) {
    for placement in placements {
        for requirement in &placement.requires {
            match lookup(placements, placement, requirement) {
                Some(target) => {
                    graph.add_dependant(placements[target].node, placement.node);
                }
                None => tracing::trace!(
                    "requirement '{}' of '{}' not installed",
                    requirement,
                    graph.node(placement.node).label()
                ),
            }
        }
    }
}

/// Finds the nearest installation of `name` visible from `placement`
fn lookup(placements: &[Placement], placement: &Placement, name: &str) -> Option<usize> {
    let mut scope = Some(placement);
    while let Some(current) = scope {
        if let Some(&target) = current.installed.get(name) {
            return Some(target);
        }
        scope = current.parent.map(|parent| &placements[parent]);
    }
    None
}

/// Splits `@scope/name` (or any `a/b` path) into its directory and base name
fn split_package_name(name: &str) -> (&str, &str) {
    let trimmed = name.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some(("", base)) => ("/", base),
        Some((group, base)) => (group, base),
        None if trimmed.is_empty() => ("", name),
        None => ("", trimmed),
    }
}
