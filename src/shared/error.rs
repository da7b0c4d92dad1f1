use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish argument mistakes from
/// failures that happened while building the dependency graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the BOM was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable path, malformed manifest, tool failure, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while locating, decoding and resolving package manifests.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Every variant renders a hint line so the CLI can print it as-is.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("Manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file was produced by the package manager and is not truncated")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Unable to parse dependency line: '{line}'\n\n💡 Hint: The build tool printed a dependency in an unknown format; the report for this directory was discarded")]
    UnparseableCoordinate { line: String },

    #[error("External tool '{tool}' failed\nDetails: {details}\n\n💡 Hint: Check that the tool is installed and that the project builds on its own")]
    ExternalToolFailure { tool: String, details: String },

    #[error("Invalid value for property '{name}': '{value}'\nDetails: {details}\n\n💡 Hint: Properties are passed as Name=value pairs")]
    InvalidProperty {
        name: String,
        value: String,
        details: String,
    },

    #[error("No such generator: '{name}'\n\n💡 Hint: Available generators are {available}")]
    UnknownGenerator { name: String, available: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl BomError {
    /// Wraps a decoding failure of the manifest at `path`, keeping the full cause chain
    pub fn manifest_parse(path: &Path, err: &anyhow::Error) -> Self {
        BomError::ManifestParseError {
            path: path.to_path_buf(),
            details: format!("{:#}", err),
        }
    }
}
