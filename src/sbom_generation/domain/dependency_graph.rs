use super::component::Component;
use super::component_node::{ComponentNode, NodeId, NodeIdentity};
use super::ecosystem::Ecosystem;
use std::collections::{HashMap, HashSet};

/// DependencyGraph aggregate: an arena of nodes addressed by [`NodeId`].
///
/// Edges are stored as indices on the nodes themselves (`dependants`
/// points from a dependency back to whatever required it), so the
/// cyclic reference structure never needs shared ownership.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    ecosystem: Ecosystem,
    nodes: Vec<ComponentNode>,
    index: HashMap<NodeIdentity, NodeId>,
}

impl DependencyGraph {
    pub fn new(ecosystem: Ecosystem) -> Self {
        Self {
            ecosystem,
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    /// Adds a node, or merges it into the existing node with the same identity.
    ///
    /// Merging unions scopes and requirements; everything else of the
    /// first declaration wins.
    pub fn insert(&mut self, node: ComponentNode) -> NodeId {
        if let Some(&id) = self.index.get(node.identity()) {
            let existing = &mut self.nodes[id.0];
            for scope in node.scopes() {
                existing.add_scope(scope);
            }
            for requirement in node.requires() {
                existing.add_requirement(requirement.as_str());
            }
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.index.insert(node.identity().clone(), id);
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &ComponentNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut ComponentNode {
        &mut self.nodes[id.0]
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ComponentNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Records that `dependant` is satisfied by `dependency`.
    ///
    /// Roots never receive incoming edges, self-edges are ignored and
    /// repeated edges are stored once. Returns whether an edge was added.
    pub fn add_dependant(&mut self, dependency: NodeId, dependant: NodeId) -> bool {
        if dependency == dependant || self.nodes[dependency.0].is_root() {
            return false;
        }
        let dependants = &mut self.nodes[dependency.0].dependants;
        if dependants.contains(&dependant) {
            return false;
        }
        dependants.push(dependant);
        true
    }

    pub fn add_subcomponent(&mut self, parent: NodeId, child: NodeId) {
        if parent == child {
            return;
        }
        let subcomponents = &mut self.nodes[parent.0].subcomponents;
        if !subcomponents.contains(&child) {
            subcomponents.push(child);
        }
    }

    pub fn dependant_edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.dependants().len()).sum()
    }

    /// Flattens the graph into boundary components, in insertion order.
    ///
    /// With `include_subcomponents` only nodes that are nobody's
    /// subcomponent are listed at the top level, each carrying its
    /// nested subtree.
    pub fn to_components(&self, include_subcomponents: bool) -> Vec<Component> {
        if !include_subcomponents {
            return self.nodes.iter().map(to_component).collect();
        }

        let nested: HashSet<NodeId> = self
            .nodes
            .iter()
            .flat_map(|node| node.subcomponents().iter().copied())
            .collect();

        let mut path = Vec::new();
        self.ids()
            .filter(|id| !nested.contains(id))
            .map(|id| self.component_tree(id, &mut path))
            .collect()
    }

    fn component_tree(&self, id: NodeId, path: &mut Vec<NodeId>) -> Component {
        let node = self.node(id);
        let mut component = to_component(node);
        path.push(id);
        for &child in node.subcomponents() {
            if !path.contains(&child) {
                component.components.push(self.component_tree(child, path));
            }
        }
        path.pop();
        component
    }
}

fn to_component(node: &ComponentNode) -> Component {
    let mut component = Component::library(node.group(), node.name(), node.version());
    component.description = node.description().to_string();
    component.purl = node.purl().map(str::to_string);
    component
}
