/// Spreadsheet adapters for the report artifact
mod xlsx_writer;

pub use xlsx_writer::XlsxReportWriter;
