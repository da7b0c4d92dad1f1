use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWalker};
use crate::adapters::outbound::process::GradleCommandRunner;
use crate::application::use_cases::{CocoapodsGenerator, GradleGenerator, NpmGenerator};
use crate::ports::inbound::BomGenerator;
use crate::shared::error::BomError;
use crate::shared::Result;

/// Registered generator names, in the order they run by default
pub const GENERATOR_NAMES: &[&str] = &["npm", "gradle", "cocoapods"];

/// Factory wiring each ecosystem generator to its filesystem and process adapters
pub struct GeneratorFactory;

impl GeneratorFactory {
    pub fn available() -> &'static [&'static str] {
        GENERATOR_NAMES
    }

    /// Creates the generator registered as `name`
    ///
    /// # Errors
    /// Returns `UnknownGenerator` for a name that is not registered.
    ///
    /// # Examples
    /// ```
    /// use bomgraph::application::factories::GeneratorFactory;
    ///
    /// let generator = GeneratorFactory::create("gradle").unwrap();
    /// assert_eq!(generator.name(), "gradle");
    /// ```
    pub fn create(name: &str) -> Result<Box<dyn BomGenerator>> {
        match name {
            "npm" => Ok(Box::new(NpmGenerator::new(
                FileSystemReader::new(),
                FileSystemWalker::new(),
            ))),
            "gradle" => Ok(Box::new(GradleGenerator::new(
                FileSystemReader::new(),
                GradleCommandRunner::new(),
                FileSystemWalker::new(),
            ))),
            "cocoapods" => Ok(Box::new(CocoapodsGenerator::new(
                FileSystemReader::new(),
                FileSystemWalker::new(),
            ))),
            _ => Err(BomError::UnknownGenerator {
                name: name.to_string(),
                available: GENERATOR_NAMES.join(", "),
            }
            .into()),
        }
    }

    /// One instance of every registered generator
    pub fn create_all() -> Vec<Box<dyn BomGenerator>> {
        GENERATOR_NAMES
            .iter()
            .filter_map(|name| Self::create(name).ok())
            .collect()
    }
}
