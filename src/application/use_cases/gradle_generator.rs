use super::directory_traversal::{DirectoryTraversal, ScanSettings};
use crate::application::dto::GeneratorOptions;
use crate::ports::inbound::BomGenerator;
use crate::ports::outbound::{DependencyReportSource, DirectoryWalker, ManifestReader};
use crate::sbom_generation::domain::Component;
use crate::sbom_generation::services::{GradleGraphBuilder, ProvenanceAnnotator};
use crate::shared::Result;
use std::path::Path;

const BUILD_FILES: &[&str] = &["build.gradle", "build.gradle.kts"];
/// Gradle from `PATH`; a project's own wrapper only runs when configured
const DEFAULT_BINARY: &str = "gradle";

/// GradleGenerator - builds the dependency graph reported by `gradle dependencies`
///
/// Recognised properties:
/// * `GradleExcludes` - exclude pattern, combined with the global one
/// * `GradlePath` - `:`-separated Gradle executables to try, in order
pub struct GradleGenerator<R, S, W>
where
    R: ManifestReader,
    S: DependencyReportSource,
    W: DirectoryWalker,
{
    reader: R,
    source: S,
    walker: W,
    binaries: Vec<String>,
    include_subcomponents: bool,
    scan: ScanSettings,
}

impl<R, S, W> GradleGenerator<R, S, W>
where
    R: ManifestReader,
    S: DependencyReportSource,
    W: DirectoryWalker,
{
    pub fn new(reader: R, source: S, walker: W) -> Self {
        Self {
            reader,
            source,
            walker,
            binaries: vec![DEFAULT_BINARY.to_string()],
            include_subcomponents: false,
            scan: ScanSettings::default(),
        }
    }

    /// A directory without a build script is not a Gradle project and yields nothing
    fn generate_directory(&self, directory: &Path) -> Result<Vec<Component>> {
        if !self.reader.manifest_exists(directory, BUILD_FILES) {
            tracing::debug!("no build.gradle in '{}'", directory.display());
            return Ok(Vec::new());
        }

        let report = self.source.dependency_report(directory, &self.binaries)?;
        tracing::debug!("parsing dependency hierarchy");
        let mut graph = GradleGraphBuilder::build(&report)?;
        ProvenanceAnnotator::annotate(&mut graph);

        Ok(graph.to_components(self.include_subcomponents))
    }
}

impl<R, S, W> BomGenerator for GradleGenerator<R, S, W>
where
    R: ManifestReader,
    S: DependencyReportSource,
    W: DirectoryWalker,
{
    fn name(&self) -> &'static str {
        "gradle"
    }

    fn configure(&mut self, options: GeneratorOptions) -> Result<()> {
        self.scan.filter.exclude = options.excludes_with("GradleExcludes")?;
        self.scan.recurse = options.recurse;
        self.binaries = options
            .list_property("GradlePath", ':')
            .filter(|paths| !paths.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_BINARY.to_string()]);
        self.include_subcomponents = options.include_subcomponents;
        Ok(())
    }

    fn generate_bom(&self, path: &Path) -> Result<Vec<Component>> {
        DirectoryTraversal::run(&self.walker, &self.scan, path, |directory| {
            self.generate_directory(directory)
        })
    }
}
