/// Formatter adapters for the run summary
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonSummaryFormatter;
pub use text_formatter::TextSummaryFormatter;
