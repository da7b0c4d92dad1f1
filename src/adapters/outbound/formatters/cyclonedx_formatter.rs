use crate::ports::outbound::BomFormatter;
use crate::sbom_generation::domain::{self, BomMetadata};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Bom<'a> {
    bom_format: &'static str,
    spec_version: &'static str,
    version: u32,
    serial_number: String,
    metadata: Metadata<'a>,
    components: Vec<Component<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: String,
    tools: Vec<Tool<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Component<'a> {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    group: &'a str,
    name: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<Component<'a>>,
}

impl<'a> From<&'a domain::Component> for Component<'a> {
    fn from(component: &'a domain::Component) -> Self {
        Self {
            component_type: component.classification.as_str(),
            group: &component.group,
            name: &component.name,
            version: &component.version,
            description: &component.description,
            purl: component.purl.as_deref(),
            components: component.components.iter().map(Component::from).collect(),
        }
    }
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BomFormatter for CycloneDxFormatter {
    fn format(&self, components: &[domain::Component], metadata: &BomMetadata) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX",
            spec_version: "1.6",
            version: 1,
            serial_number: metadata.serial_number(),
            metadata: Metadata {
                timestamp: metadata.timestamp(),
                tools: vec![Tool {
                    name: metadata.tool_name(),
                    version: metadata.tool_version(),
                }],
            },
            components: components.iter().map(Component::from).collect(),
        };

        Ok(serde_json::to_string_pretty(&bom)?)
    }
}
