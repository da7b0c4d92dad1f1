use crate::sbom_generation::domain::BomMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Produces the header information of a generated BOM document
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Metadata stamped with the current UTC time and a fresh `urn:uuid` serial
    pub fn generate(tool_name: &str, tool_version: &str) -> BomMetadata {
        BomMetadata::new(Utc::now(), tool_name, tool_version, Uuid::new_v4())
    }

    /// Metadata naming this crate as the producing tool
    pub fn for_this_tool() -> BomMetadata {
        Self::generate(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
