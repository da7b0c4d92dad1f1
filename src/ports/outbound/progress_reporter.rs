/// ProgressReporter port for user-facing progress on stderr
///
/// Diagnostics go through `tracing`; this port is for the short status
/// lines a user watches while generators run.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports which step out of `total` is running
    ///
    /// # Arguments
    /// * `current` - 1-based index of the running step
    /// * `total` - Number of steps
    /// * `message` - Optional label of the step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a failure that does not stop the run
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
