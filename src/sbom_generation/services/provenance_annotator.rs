use crate::sbom_generation::domain::{DependencyGraph, Ecosystem, NodeId, NodeKind};
use std::collections::{HashMap, HashSet, VecDeque};

/// ProvenanceAnnotator service for writing "Required by" descriptions
///
/// Pure graph logic: it reads `dependants` edges and writes each node's
/// description, nothing else.
pub struct ProvenanceAnnotator;

impl ProvenanceAnnotator {
    /// Fills in the description of every node of the graph
    pub fn annotate(graph: &mut DependencyGraph) {
        let descriptions: Vec<(NodeId, String)> = graph
            .ids()
            .map(|id| (id, Self::describe(graph, id)))
            .collect();

        for (id, description) in descriptions {
            graph.node_mut(id).set_description(description);
        }
    }

    /// Finds the shortest chain of dependants leading from `start` to a root
    /// or build configuration.
    ///
    /// The returned ids are ordered from the nearest requirer outwards and
    /// include the terminator. The search visits at most `max_depth + 1`
    /// hops; when no terminator lies within that bound, the first path that
    /// reached the bound is returned truncated. Nodes that nobody depends on
    /// get an empty chain.
    ///
    /// # Arguments
    /// * `graph` - The resolved dependency graph
    /// * `start` - The node whose provenance is wanted
    /// * `max_depth` - Search bound, see [`Ecosystem::max_chain_depth`]
    pub fn shortest_chain(graph: &DependencyGraph, start: NodeId, max_depth: usize) -> Vec<NodeId> {
        let limit = max_depth + 1;
        let mut predecessor: HashMap<NodeId, NodeId> = HashMap::new();
        let mut visited: HashSet<NodeId> = HashSet::from([start]);
        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::from([(start, 0)]);
        let mut truncated: Option<NodeId> = None;

        while let Some((current, hops)) = queue.pop_front() {
            for &dependant in graph.node(current).dependants() {
                if !visited.insert(dependant) {
                    continue;
                }
                predecessor.insert(dependant, current);

                if graph.node(dependant).terminates_chain() {
                    return Self::path_to(&predecessor, start, dependant);
                }
                if hops + 1 < limit {
                    queue.push_back((dependant, hops + 1));
                } else if truncated.is_none() {
                    truncated = Some(dependant);
                }
            }
        }

        truncated
            .map(|end| Self::path_to(&predecessor, start, end))
            .unwrap_or_default()
    }

    fn path_to(predecessor: &HashMap<NodeId, NodeId>, start: NodeId, end: NodeId) -> Vec<NodeId> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(&previous) = predecessor.get(&current) {
            if previous == start {
                break;
            }
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }

    fn describe(graph: &DependencyGraph, id: NodeId) -> String {
        let ecosystem = graph.ecosystem();
        let node = graph.node(id);
        tracing::trace!("building description for '{}'", node.purl().unwrap_or(node.name()));

        match node.kind() {
            NodeKind::Root => format!("{}\n", ecosystem.root_label()),
            NodeKind::Configuration => "Gradle build configuration\n".to_string(),
            NodeKind::Package => {
                let chain = Self::shortest_chain(graph, id, ecosystem.max_chain_depth())
                    .into_iter()
                    .map(|link| graph.node(link).label())
                    .collect::<Vec<_>>()
                    .join("\n\t");

                match ecosystem {
                    Ecosystem::Gradle => {
                        let kind = if node.is_project() {
                            "Gradle project"
                        } else {
                            ecosystem.package_label()
                        };
                        let scopes = node
                            .scopes()
                            .iter()
                            .map(String::as_str)
                            .collect::<Vec<_>>()
                            .join(", ");
                        format!("{kind}\n\nAppears in: {scopes}\n\nRequired by:\n\t{chain}\n")
                    }
                    Ecosystem::Npm | Ecosystem::Cocoapods => {
                        format!("{}\n\nRequired by:\n\t{}", ecosystem.package_label(), chain)
                    }
                }
            }
        }
    }
}
