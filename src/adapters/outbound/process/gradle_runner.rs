use crate::ports::outbound::DependencyReportSource;
use crate::sbom_generation::services::DependencyReport;
use crate::shared::error::BomError;
use crate::shared::Result;
use std::env;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

const GRADLE_ARGS: [&str; 4] = ["-q", "--console", "plain", "dependencies"];

/// GradleCommandRunner adapter running `gradle dependencies` as a child process
///
/// Stdout is parsed while the process runs; stderr is collected on a
/// separate thread so a chatty build cannot block on a full pipe.
pub struct GradleCommandRunner;

impl GradleCommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Picks the first usable Gradle executable
    ///
    /// Absolute candidates are used as they are, bare names are searched on
    /// `PATH`, and anything else is taken relative to `project_path`.
    pub fn locate_binary(project_path: &Path, candidates: &[String]) -> Result<PathBuf> {
        for candidate in candidates {
            let candidate_path = Path::new(candidate);
            let found = if candidate_path.is_absolute() {
                Some(candidate_path.to_path_buf()).filter(|path| is_executable(path))
            } else if candidate_path.components().count() == 1 {
                search_path(candidate)
            } else {
                let absolute = env::current_dir()
                    .map(|cwd| cwd.join(project_path).join(candidate_path))
                    .map_err(|e| BomError::ExternalToolFailure {
                        tool: candidate.clone(),
                        details: format!("cannot resolve working directory: {}", e),
                    })?;
                Some(absolute).filter(|path| is_executable(path))
            };

            if let Some(path) = found {
                tracing::debug!("using Gradle binary from '{}'", path.display());
                return Ok(path);
            }
        }

        Err(BomError::ExternalToolFailure {
            tool: "gradle".to_string(),
            details: format!(
                "could not locate Gradle binary (tried: {})",
                candidates.join(", ")
            ),
        }
        .into())
    }
}

impl Default for GradleCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyReportSource for GradleCommandRunner {
    fn dependency_report(
        &self,
        project_path: &Path,
        binary_candidates: &[String],
    ) -> Result<DependencyReport> {
        let binary = Self::locate_binary(project_path, binary_candidates)?;
        let tool = binary.display().to_string();
        let failure = |details: String| BomError::ExternalToolFailure {
            tool: tool.clone(),
            details,
        };

        tracing::info!("listing dependencies in '{}'", project_path.display());
        let mut child = Command::new(&binary)
            .args(GRADLE_ARGS)
            .current_dir(project_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| failure(format!("failed to start: {}", e)))?;

        let stderr = child.stderr.take();
        let stderr_reader = thread::spawn(move || {
            let mut captured = String::new();
            if let Some(mut stderr) = stderr {
                // Whatever was read before a failure is still useful
                let _ = stderr.read_to_string(&mut captured);
            }
            captured
        });

        let report = match child.stdout.take() {
            Some(stdout) => DependencyReport::parse(BufReader::new(stdout)),
            None => Err(anyhow::anyhow!("Gradle stdout was not captured")),
        };

        let status = child
            .wait()
            .map_err(|e| failure(format!("failed to wait for process: {}", e)))?;
        let captured = stderr_reader.join().unwrap_or_default();

        if !status.success() {
            return Err(failure(format!("{}\n{}", status, captured.trim_end())).into());
        }
        report
    }
}

fn search_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|path| is_executable(path))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}
