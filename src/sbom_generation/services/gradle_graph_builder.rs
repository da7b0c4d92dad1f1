use super::gradle_coordinate::Coordinate;
use super::gradle_report::DependencyReport;
use crate::sbom_generation::domain::{ComponentNode, DependencyGraph, Ecosystem, NodeId, PurlType};
use crate::shared::Result;

/// GradleGraphBuilder service for turning a dependency report into a graph
///
/// The report already encodes who requested what, so every tree edge
/// becomes a dependant edge directly. Entries shared between
/// configurations merge into one node that remembers every configuration
/// it appeared in.
pub struct GradleGraphBuilder;

impl GradleGraphBuilder {
    /// Builds the resolved graph of one Gradle project
    ///
    /// # Errors
    /// Fails with `UnparseableCoordinate` when an entry matches none of the
    /// coordinate forms; a misparsed line would corrupt the whole graph.
    pub fn build(report: &DependencyReport) -> Result<DependencyGraph> {
        let mut graph = DependencyGraph::new(Ecosystem::Gradle);

        for configuration in report.configurations() {
            tracing::debug!("walking build configuration '{}'", configuration.name);

            // (entry, nearest resolved requester)
            let mut pending: Vec<(usize, Option<NodeId>)> = configuration
                .dependencies
                .iter()
                .rev()
                .map(|&entry| (entry, None))
                .collect();

            while let Some((entry, requester)) = pending.pop() {
                let coordinate = Coordinate::parse(report.value(entry))?;

                let parent = if coordinate.resolved {
                    let mut node = ComponentNode::package(
                        PurlType::Maven,
                        &coordinate.group,
                        &coordinate.name,
                        &coordinate.version,
                    )
                    .with_project(coordinate.project);
                    node.add_scope(configuration.name);
                    let id = graph.insert(node);

                    let dependant = match requester {
                        Some(requester) => requester,
                        None => graph.insert(ComponentNode::configuration(configuration.name)),
                    };
                    graph.add_dependant(id, dependant);
                    Some(id)
                } else {
                    tracing::trace!("skipping unresolved '{}'", report.value(entry));
                    requester
                };

                pending.extend(
                    report
                        .children(entry)
                        .iter()
                        .rev()
                        .map(|&child| (child, parent)),
                );
            }
        }

        Ok(graph)
    }
}
