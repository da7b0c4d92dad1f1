use crate::shared::Result;

/// OutputPresenter port for delivering the rendered document
///
/// Abstracts the destination (stdout or a file).
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
