use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation token shared between a run and its owner
///
/// Cloning yields a handle to the same flag. The pipeline polls it before
/// each file; setting it never interrupts the file in progress.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// ReportRequest - Request DTO for the report generation use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Directory scanned recursively for report pages
    pub input_directory: PathBuf,
    /// Location of the `.xlsx` workbook to write
    pub output_path: PathBuf,
    /// Optional cancellation token
    pub cancel: Option<CancelFlag>,
}

impl ReportRequest {
    pub fn new(input_directory: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_directory,
            output_path,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(CancelFlag::is_cancelled)
            .unwrap_or(false)
    }
}
