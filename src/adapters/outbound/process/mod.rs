/// Child-process adapters for external build tools
mod gradle_runner;

pub use gradle_runner::GradleCommandRunner;
