use super::ecosystem::{package_url, PurlType};
use std::collections::BTreeSet;

/// Index of a node inside its [`DependencyGraph`](super::DependencyGraph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Role of a node in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The scanned project or module itself
    Root,
    /// Synthetic Gradle build configuration (`compileClasspath`, ...)
    Configuration,
    /// A third-party or sibling-project package
    Package,
}

/// Identity of a node: two declarations with the same identity are one node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdentity {
    pub group: String,
    pub name: String,
    pub version: String,
}

/// One package instance in a dependency graph.
///
/// `requires`, `dependants` and `scopes` are transient: they drive
/// resolution and provenance but never reach the serialized document.
#[derive(Debug, Clone)]
pub struct ComponentNode {
    identity: NodeIdentity,
    purl: Option<String>,
    description: String,
    kind: NodeKind,
    project: bool,
    requires: Vec<String>,
    pub(crate) dependants: Vec<NodeId>,
    scopes: BTreeSet<String>,
    pub(crate) subcomponents: Vec<NodeId>,
}

impl ComponentNode {
    fn new(kind: NodeKind, purl: Option<String>, group: &str, name: &str, version: &str) -> Self {
        Self {
            identity: NodeIdentity {
                group: group.to_string(),
                name: name.to_string(),
                version: version.to_string(),
            },
            purl,
            description: String::new(),
            kind,
            project: false,
            requires: Vec::new(),
            dependants: Vec::new(),
            scopes: BTreeSet::new(),
            subcomponents: Vec::new(),
        }
    }

    /// A package node; its identifier is derived from group, name and version
    pub fn package(purl_type: PurlType, group: &str, name: &str, version: &str) -> Self {
        let purl = package_url(purl_type, &qualified_name(group, name), version);
        Self::new(NodeKind::Package, Some(purl), group, name, version)
    }

    /// The project root; it terminates every provenance chain
    pub fn root(purl_type: PurlType, group: &str, name: &str, version: &str) -> Self {
        let purl = package_url(purl_type, &qualified_name(group, name), version);
        Self::new(NodeKind::Root, Some(purl), group, name, version)
    }

    /// A Gradle build configuration; it has no package identifier
    pub fn configuration(name: &str) -> Self {
        Self::new(NodeKind::Configuration, None, "", name, "")
    }

    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in requires {
            self.add_requirement(name);
        }
        self
    }

    pub fn with_project(mut self, project: bool) -> Self {
        self.project = project;
        self
    }

    pub fn identity(&self) -> &NodeIdentity {
        &self.identity
    }

    pub fn group(&self) -> &str {
        &self.identity.group
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn version(&self) -> &str {
        &self.identity.version
    }

    pub fn purl(&self) -> Option<&str> {
        self.purl.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_root(&self) -> bool {
        self.kind == NodeKind::Root
    }

    pub fn is_configuration(&self) -> bool {
        self.kind == NodeKind::Configuration
    }

    /// Roots and build configurations end a provenance chain
    pub fn terminates_chain(&self) -> bool {
        self.kind != NodeKind::Package
    }

    pub fn is_project(&self) -> bool {
        self.project
    }

    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    pub fn dependants(&self) -> &[NodeId] {
        &self.dependants
    }

    pub fn scopes(&self) -> &BTreeSet<String> {
        &self.scopes
    }

    pub fn subcomponents(&self) -> &[NodeId] {
        &self.subcomponents
    }

    /// `name@version` as shown in provenance chains; configurations have no version
    pub fn label(&self) -> String {
        if self.identity.version.is_empty() {
            self.identity.name.clone()
        } else {
            format!("{}@{}", self.identity.name, self.identity.version)
        }
    }

    pub fn add_requirement(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.requires.contains(&name) {
            self.requires.push(name);
        }
    }

    pub fn add_scope(&mut self, scope: &str) {
        self.scopes.insert(scope.to_string());
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = description;
    }
}

fn qualified_name(group: &str, name: &str) -> String {
    if group.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", group, name)
    }
}
