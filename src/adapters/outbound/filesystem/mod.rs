/// Filesystem adapters for manifest reading, directory walking and output
mod directory_walker;
mod file_reader;
mod file_writer;

pub use directory_walker::FileSystemWalker;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
