use serde::Serialize;
use std::path::PathBuf;

/// ReportResponse - Outcome of one report generation run
///
/// `processed` counts every file taken from the queue, whatever its fate;
/// `written_rows + skipped + failed == processed` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportResponse {
    /// Workbook that was written
    pub output_path: PathBuf,
    /// Candidate files found under the input directory
    pub total: usize,
    pub processed: usize,
    /// Rows written; equals the last sequence number
    pub written_rows: usize,
    /// Duplicates and unreadable files
    pub skipped: usize,
    /// Files that failed for any other reason
    pub failed: usize,
    /// True when the run stopped early on request
    pub cancelled: bool,
}

impl ReportResponse {
    pub fn empty(output_path: PathBuf) -> Self {
        Self {
            output_path,
            total: 0,
            processed: 0,
            written_rows: 0,
            skipped: 0,
            failed: 0,
            cancelled: false,
        }
    }
}
