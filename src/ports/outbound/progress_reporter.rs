/// ProgressReporter port for reporting progress during a run
///
/// Implementations are driven from the thread that runs the pipeline.
/// Front ends that live on another thread receive the same calls through
/// `ChannelProgressReporter` and replay them on their own thread.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress as `current` of `total` processed files
    ///
    /// # Arguments
    /// * `current` - Files processed so far
    /// * `total` - Files found
    /// * `message` - Optional status line; `None` keeps the previous one
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
