use super::directory_traversal::{DirectoryTraversal, ScanSettings};
use crate::application::dto::GeneratorOptions;
use crate::ports::inbound::BomGenerator;
use crate::ports::outbound::{DirectoryWalker, ManifestReader};
use crate::sbom_generation::domain::Component;
use crate::sbom_generation::services::{CocoapodsGraphBuilder, PodfileLock, ProvenanceAnnotator};
use crate::shared::error::BomError;
use crate::shared::Result;
use std::path::Path;

const PODFILE_LOCK: &[&str] = &["Podfile.lock"];

/// CocoapodsGenerator - builds the pod graph recorded in `Podfile.lock`
///
/// Recognised properties:
/// * `CocoapodsExcludes` - exclude pattern, combined with the global one
pub struct CocoapodsGenerator<R: ManifestReader, W: DirectoryWalker> {
    reader: R,
    walker: W,
    include_subcomponents: bool,
    scan: ScanSettings,
}

impl<R: ManifestReader, W: DirectoryWalker> CocoapodsGenerator<R, W> {
    pub fn new(reader: R, walker: W) -> Self {
        Self {
            reader,
            walker,
            include_subcomponents: false,
            scan: ScanSettings::default(),
        }
    }

    fn generate_directory(&self, directory: &Path) -> Result<Vec<Component>> {
        let file = self.reader.read_manifest(directory, PODFILE_LOCK)?;
        let lockfile =
            PodfileLock::parse(&file.content).map_err(|e| BomError::manifest_parse(&file.path, &e))?;

        let mut graph = CocoapodsGraphBuilder::build(&directory.display().to_string(), &lockfile)
            .map_err(|e| BomError::manifest_parse(&file.path, &e))?;
        ProvenanceAnnotator::annotate(&mut graph);

        Ok(graph.to_components(self.include_subcomponents))
    }
}

impl<R: ManifestReader, W: DirectoryWalker> BomGenerator for CocoapodsGenerator<R, W> {
    fn name(&self) -> &'static str {
        "cocoapods"
    }

    fn configure(&mut self, options: GeneratorOptions) -> Result<()> {
        self.scan.filter.exclude = options.excludes_with("CocoapodsExcludes")?;
        self.scan.recurse = options.recurse;
        self.include_subcomponents = options.include_subcomponents;
        Ok(())
    }

    fn generate_bom(&self, path: &Path) -> Result<Vec<Component>> {
        DirectoryTraversal::run(&self.walker, &self.scan, path, |directory| {
            self.generate_directory(directory)
        })
    }
}
