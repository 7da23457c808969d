use crate::shared::Result;

/// OutputPresenter port for presenting the run summary
///
/// This port abstracts where the summary printed after a run ends up.
pub trait OutputPresenter {
    /// Presents the formatted summary
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails.
    fn present(&self, content: &str) -> Result<()>;
}
