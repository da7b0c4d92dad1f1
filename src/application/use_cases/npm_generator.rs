use super::directory_traversal::{DirectoryTraversal, ScanSettings};
use crate::application::dto::GeneratorOptions;
use crate::ports::inbound::BomGenerator;
use crate::ports::outbound::{DirectoryWalker, ManifestReader, WalkFilter};
use crate::sbom_generation::domain::Component;
use crate::sbom_generation::services::npm_lockfile::{parse_lockfile, parse_manifest};
use crate::sbom_generation::services::{NpmGraphBuilder, ProvenanceAnnotator};
use crate::shared::error::BomError;
use crate::shared::Result;
use std::path::Path;

/// Lockfiles in order of preference
const LOCKFILES: &[&str] = &["package-lock.json", "npm-shrinkwrap.json"];
const PACKAGE_JSON: &[&str] = &["package.json"];
/// Never scanned, it only holds installed copies
const INSTALL_DIRECTORY: &str = "node_modules";

/// NpmGenerator - builds the npm dependency graph of a project
///
/// Recognised properties:
/// * `NpmExcludes` - exclude pattern, combined with the global one
/// * `NpmDevDependencies` - include dev dependencies even without `include_tests`
pub struct NpmGenerator<R: ManifestReader, W: DirectoryWalker> {
    reader: R,
    walker: W,
    include_dev: bool,
    include_subcomponents: bool,
    scan: ScanSettings,
}

impl<R: ManifestReader, W: DirectoryWalker> NpmGenerator<R, W> {
    pub fn new(reader: R, walker: W) -> Self {
        Self {
            reader,
            walker,
            include_dev: false,
            include_subcomponents: false,
            scan: ScanSettings {
                recurse: false,
                filter: WalkFilter {
                    exclude: None,
                    skipped_names: vec![INSTALL_DIRECTORY],
                },
            },
        }
    }

    fn generate_directory(&self, directory: &Path) -> Result<Vec<Component>> {
        let file = self.reader.read_manifest(directory, LOCKFILES)?;
        let lockfile = parse_lockfile(&file.content)
            .map_err(|e| BomError::manifest_parse(&file.path, &e))?;

        let manifest = match self.reader.read_manifest(directory, PACKAGE_JSON) {
            Ok(file) => Some(
                parse_manifest(&file.content)
                    .map_err(|e| BomError::manifest_parse(&file.path, &e))?,
            ),
            Err(err) => {
                tracing::trace!("no usable package.json in '{}': {}", directory.display(), err);
                None
            }
        };

        let mut graph = NpmGraphBuilder::new(self.include_dev).build(
            &directory.display().to_string(),
            &lockfile,
            manifest.as_ref(),
        );
        ProvenanceAnnotator::annotate(&mut graph);

        Ok(graph.to_components(self.include_subcomponents))
    }
}

impl<R: ManifestReader, W: DirectoryWalker> BomGenerator for NpmGenerator<R, W> {
    fn name(&self) -> &'static str {
        "npm"
    }

    fn configure(&mut self, options: GeneratorOptions) -> Result<()> {
        let dev_dependencies = options.bool_property("NpmDevDependencies")?;
        self.scan.filter.exclude = options.excludes_with("NpmExcludes")?;
        self.scan.recurse = options.recurse;
        self.include_dev = options.include_tests || dev_dependencies.unwrap_or(false);
        self.include_subcomponents = options.include_subcomponents;
        Ok(())
    }

    fn generate_bom(&self, path: &Path) -> Result<Vec<Component>> {
        DirectoryTraversal::run(&self.walker, &self.scan, path, |directory| {
            self.generate_directory(directory)
        })
    }
}
