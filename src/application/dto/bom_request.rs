use super::GeneratorOptions;
use std::path::PathBuf;

/// BomRequest - Internal request DTO for the BOM generation use case
#[derive(Debug, Clone)]
pub struct BomRequest {
    /// Directory to scan
    pub project_path: PathBuf,
    /// Registered generator names to run, in order
    pub generators: Vec<String>,
    /// Options passed to every generator's `configure`
    pub options: GeneratorOptions,
}

impl BomRequest {
    pub fn new(project_path: PathBuf, generators: Vec<String>, options: GeneratorOptions) -> Self {
        Self {
            project_path,
            generators,
            options,
        }
    }
}
