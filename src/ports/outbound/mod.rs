/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, spreadsheet, console).
pub mod document_collector;
pub mod document_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_writer;

pub use document_collector::DocumentCollector;
pub use document_reader::DocumentReader;
pub use formatter::SummaryFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_writer::ReportWriter;
