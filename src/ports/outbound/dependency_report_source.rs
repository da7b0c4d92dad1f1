use crate::sbom_generation::services::DependencyReport;
use crate::shared::Result;
use std::path::Path;

/// DependencyReportSource port for obtaining `gradle dependencies` output
pub trait DependencyReportSource {
    /// Produces the parsed dependency report of the Gradle project at `project_path`
    ///
    /// # Arguments
    /// * `project_path` - Directory containing `build.gradle`
    /// * `binary_candidates` - Gradle executables to try, in order
    ///
    /// # Errors
    /// Returns `ExternalToolFailure` if no candidate is executable, the
    /// process cannot be spawned, or it exits unsuccessfully.
    fn dependency_report(
        &self,
        project_path: &Path,
        binary_candidates: &[String],
    ) -> Result<DependencyReport>;
}
