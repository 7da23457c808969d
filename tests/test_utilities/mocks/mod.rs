/// Mock implementations for testing
mod mock_document_source;
mod mock_progress_reporter;
mod mock_report_writer;

pub use mock_document_source::MockDocumentSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_writer::MockReportWriter;
