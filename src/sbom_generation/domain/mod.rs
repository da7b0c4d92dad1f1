pub mod bom_metadata;
pub mod component;
pub mod component_node;
pub mod dependency_graph;
pub mod ecosystem;

pub use bom_metadata::BomMetadata;
pub use component::{Classification, Component};
pub use component_node::{ComponentNode, NodeId, NodeIdentity, NodeKind};
pub use dependency_graph::DependencyGraph;
pub use ecosystem::{package_url, Ecosystem, PurlType};
