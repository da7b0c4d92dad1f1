use crate::sbom_generation::domain::{ComponentNode, DependencyGraph, Ecosystem, NodeId, PurlType};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// The parts of `Podfile.lock` that describe the installed pods
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodfileLock {
    #[serde(rename = "PODS", default)]
    pub pods: Vec<PodEntry>,
    #[serde(rename = "DEPENDENCIES", default)]
    pub dependencies: Vec<String>,
}

/// A `PODS` item: either `"Name (1.0)"` or `{"Name (1.0)": ["Dep (= 1.0)", ...]}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PodEntry {
    Leaf(String),
    WithDependencies(BTreeMap<String, Vec<String>>),
}

impl PodfileLock {
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse Podfile.lock")
    }
}

/// CocoaPods graph builder
///
/// Podfile.lock names every pod and subspec globally, so requirements
/// are looked up by name without any scoping.
pub struct CocoapodsGraphBuilder;

impl CocoapodsGraphBuilder {
    pub fn build(project_path: &str, lockfile: &PodfileLock) -> Result<DependencyGraph> {
        let mut graph = DependencyGraph::new(Ecosystem::Cocoapods);

        let root_requires = lockfile
            .dependencies
            .iter()
            .map(|dependency| first_field(dependency))
            .collect::<Result<Vec<_>>>()?;
        let root = graph.insert(
            ComponentNode::root(PurlType::Generic, "", project_path, "unknown")
                .with_requires(root_requires),
        );

        let mut by_name: HashMap<String, NodeId> = HashMap::new();
        for entry in &lockfile.pods {
            for (declaration, requires) in entry.declarations() {
                let (name, version) = parse_declaration(declaration)?;
                let requires = requires
                    .iter()
                    .map(|requirement| first_field(requirement))
                    .collect::<Result<Vec<_>>>()?;

                let id = graph.insert(
                    ComponentNode::package(PurlType::Cocoapods, "", name, version)
                        .with_requires(requires),
                );
                by_name.insert(name.to_string(), id);
            }
        }

        let ids: Vec<NodeId> = graph.ids().collect();
        for &id in &ids {
            let requires = graph.node(id).requires().to_vec();
            for requirement in requires {
                match by_name.get(&requirement) {
                    Some(&dependency) => {
                        graph.add_dependant(dependency, id);
                    }
                    None => tracing::trace!("requirement '{}' not in PODS", requirement),
                }
            }
        }

        for &id in ids.iter().filter(|&&id| id != root) {
            if let Some(parent) = parent_pod(&by_name, graph.node(id).name()) {
                graph.add_subcomponent(parent, id);
            }
        }

        Ok(graph)
    }
}

impl PodEntry {
    fn declarations(&self) -> Vec<(&str, &[String])> {
        match self {
            PodEntry::Leaf(declaration) => vec![(declaration.as_str(), &[][..])],
            PodEntry::WithDependencies(map) => map
                .iter()
                .map(|(declaration, requires)| (declaration.as_str(), requires.as_slice()))
                .collect(),
        }
    }
}

/// Splits `"Name (1.0)"` into name and version; a missing version is `unknown`
fn parse_declaration(declaration: &str) -> Result<(&str, &str)> {
    let mut fields = declaration.split_whitespace();
    let name = fields
        .next()
        .with_context(|| format!("Malformed pod entry '{}'", declaration))?;
    let version = fields
        .next()
        .map(|field| field.trim_start_matches('(').trim_end_matches(')'))
        .filter(|version| !version.is_empty())
        .unwrap_or("unknown");
    Ok((name, version))
}

/// Name part of `"Name (source or constraint)"`
fn first_field(value: &str) -> Result<String> {
    value
        .split_whitespace()
        .next()
        .map(str::to_string)
        .with_context(|| format!("Malformed pod requirement '{}'", value))
}

/// Nearest enclosing pod of a subspec: `A/B/C` nests under `A/B`, else `A`
fn parent_pod(by_name: &HashMap<String, NodeId>, name: &str) -> Option<NodeId> {
    let mut prefix = name;
    while let Some((head, _)) = prefix.rsplit_once('/') {
        if let Some(&parent) = by_name.get(head) {
            return Some(parent);
        }
        prefix = head;
    }
    None
}
