use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Header of a generated BOM document: when, by what, and under which serial
#[derive(Debug, Clone, PartialEq)]
pub struct BomMetadata {
    generated_at: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
    serial: Uuid,
}

impl BomMetadata {
    pub fn new(generated_at: DateTime<Utc>, tool_name: &str, tool_version: &str, serial: Uuid) -> Self {
        Self {
            generated_at,
            tool_name: tool_name.to_string(),
            tool_version: tool_version.to_string(),
            serial,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// RFC 3339 at second precision with a `Z` suffix
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial(&self) -> Uuid {
        self.serial
    }

    /// Serial in the `urn:uuid:` form CycloneDX expects
    pub fn serial_number(&self) -> String {
        self.serial.urn().to_string()
    }
}
