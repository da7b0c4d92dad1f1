/// Application layer - Use cases and DTOs
///
/// This layer drives the ecosystem generators: it configures them, walks
/// project trees, and gathers their components into one response.
pub mod dto;
pub mod factories;
pub mod use_cases;
