//! bomgraph - dependency graphs and provenance for npm, Gradle and CocoaPods projects
//!
//! This library reads package-manager artifacts (lockfiles and build-tool
//! output), resolves them into a dependency graph per project, and
//! annotates every component with a package URL and a "Required by" chain.
//! The result is rendered as a CycloneDX document.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): graph model and the per-ecosystem resolvers
//! - **Application Layer** (`application`): generators, directory traversal and orchestration
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bomgraph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let mut use_case =
//!     GenerateBomUseCase::new(GeneratorFactory::create_all(), StderrProgressReporter::new());
//!
//! let request = BomRequest::new(
//!     PathBuf::from("."),
//!     vec!["npm".to_string()],
//!     GeneratorOptions::default(),
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = CycloneDxFormatter::new().format(&response.components, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWalker, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::adapters::outbound::process::GradleCommandRunner;
    pub use crate::application::dto::{BomRequest, BomResponse, GeneratorFailure, GeneratorOptions};
    pub use crate::application::factories::GeneratorFactory;
    pub use crate::application::use_cases::{
        CocoapodsGenerator, GenerateBomUseCase, GradleGenerator, NpmGenerator,
    };
    pub use crate::ports::inbound::BomGenerator;
    pub use crate::ports::outbound::{
        BomFormatter, DependencyReportSource, DirectoryWalker, ManifestFile, ManifestReader,
        OutputPresenter, ProgressReporter, WalkFilter,
    };
    pub use crate::sbom_generation::domain::{
        BomMetadata, Component, ComponentNode, DependencyGraph, Ecosystem, NodeId,
    };
    pub use crate::sbom_generation::services::{DependencyReport, ProvenanceAnnotator};
    pub use crate::shared::error::BomError;
    pub use crate::shared::Result;
}
