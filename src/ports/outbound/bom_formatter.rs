use crate::sbom_generation::domain::{Component, BomMetadata};
use crate::shared::Result;

/// BomFormatter port for serializing the final component list
pub trait BomFormatter {
    /// Renders a complete BOM document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, components: &[Component], metadata: &BomMetadata) -> Result<String>;
}
