use crate::sbom_generation::domain::{Component, BomMetadata};

/// A generator that could not be configured or run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorFailure {
    pub generator: String,
    pub message: String,
}

/// BomResponse - Internal response DTO from the BOM generation use case
///
/// Components of all generators are concatenated in generator order; a
/// component found by two generators or in two directories is listed twice.
#[derive(Debug, Clone)]
pub struct BomResponse {
    pub components: Vec<Component>,
    /// Document metadata (timestamp, tool info, serial number)
    pub metadata: BomMetadata,
    pub failures: Vec<GeneratorFailure>,
}

impl BomResponse {
    pub fn new(
        components: Vec<Component>,
        metadata: BomMetadata,
        failures: Vec<GeneratorFailure>,
    ) -> Self {
        Self {
            components,
            metadata,
            failures,
        }
    }
}
