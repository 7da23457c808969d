use crate::application::dto::ReportResponse;
use crate::shared::Result;
use std::path::Path;

/// SummaryFormatter port for rendering the outcome of a run
///
/// This port abstracts how the run summary is shown (plain text, JSON).
pub trait SummaryFormatter {
    /// Formats the summary of a finished run
    ///
    /// # Arguments
    /// * `input_directory` - Directory that was scanned
    /// * `response` - Counters and output location of the run
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, input_directory: &Path, response: &ReportResponse) -> Result<String>;
}
