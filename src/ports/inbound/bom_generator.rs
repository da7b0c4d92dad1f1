use crate::application::dto::GeneratorOptions;
use crate::sbom_generation::domain::Component;
use crate::shared::Result;
use std::path::Path;

/// BomGenerator - Inbound port implemented by every ecosystem generator
///
/// Callers configure a generator once and may then run it against any
/// number of paths. Each run is independent: no state carries over from
/// one path to the next.
pub trait BomGenerator {
    /// Registered name, as accepted by `--generators`
    fn name(&self) -> &'static str;

    /// Applies options and ecosystem properties
    ///
    /// # Errors
    /// Returns `InvalidProperty` when a property value is malformed, e.g.
    /// an exclude pattern that is not a valid regular expression.
    fn configure(&mut self, options: GeneratorOptions) -> Result<()>;

    /// Builds, resolves and annotates the dependency graph found at `path`
    ///
    /// With recursion enabled, failures in subdirectories are logged and
    /// skipped; only a failure for `path` itself is returned.
    fn generate_bom(&self, path: &Path) -> Result<Vec<Component>>;
}
