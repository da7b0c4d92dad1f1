/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, child processes, console).
pub mod bom_formatter;
pub mod dependency_report_source;
pub mod directory_walker;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use bom_formatter::BomFormatter;
pub use dependency_report_source::DependencyReportSource;
pub use directory_walker::{DirectoryWalker, WalkFilter};
pub use manifest_reader::{ManifestFile, ManifestReader};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
