/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod bom_request;
mod bom_response;
mod generator_options;

pub use bom_request::BomRequest;
pub use bom_response::{BomResponse, GeneratorFailure};
pub use generator_options::{compile_pattern, parse_properties, GeneratorOptions};
