mod cocoapods_graph_builder;
mod gradle_coordinate;
mod gradle_graph_builder;
mod gradle_report;
mod metadata_generator;
mod npm_graph_builder;
pub mod npm_lockfile;
mod provenance_annotator;

pub use cocoapods_graph_builder::{CocoapodsGraphBuilder, PodEntry, PodfileLock};
pub use gradle_coordinate::Coordinate;
pub use gradle_graph_builder::GradleGraphBuilder;
pub use gradle_report::{BuildConfiguration, DependencyReport};
pub use metadata_generator::MetadataGenerator;
pub use npm_graph_builder::NpmGraphBuilder;
pub use npm_lockfile::{InstalledPackage, NpmLockfile, PackageManifest};
pub use provenance_annotator::ProvenanceAnnotator;
