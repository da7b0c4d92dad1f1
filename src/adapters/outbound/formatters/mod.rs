/// Formatter adapters for BOM output formats
mod cyclonedx_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
