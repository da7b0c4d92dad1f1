use bomgraph::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DependencyReportSource returning a fixed `gradle dependencies` text
#[derive(Default, Clone)]
pub struct MockDependencyReportSource {
    pub output: String,
    pub should_fail: bool,
    pub requested: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockDependencyReportSource {
    pub fn new(output: &str) -> Self {
        Self {
            output: output.to_string(),
            ..Self::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested.lock().unwrap().clone()
    }
}

impl DependencyReportSource for MockDependencyReportSource {
    fn dependency_report(
        &self,
        project_path: &Path,
        _binary_candidates: &[String],
    ) -> Result<DependencyReport> {
        self.requested
            .lock()
            .unwrap()
            .push(project_path.to_path_buf());
        if self.should_fail {
            return Err(BomError::ExternalToolFailure {
                tool: "gradle".to_string(),
                details: "Mock gradle failure".to_string(),
            }
            .into());
        }
        DependencyReport::parse(self.output.as_bytes())
    }
}
