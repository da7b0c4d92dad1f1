/// Mock implementations for testing
mod mock_dependency_report_source;
mod mock_directory_walker;
mod mock_manifest_reader;
mod mock_progress_reporter;

pub use mock_dependency_report_source::MockDependencyReportSource;
pub use mock_directory_walker::MockDirectoryWalker;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
