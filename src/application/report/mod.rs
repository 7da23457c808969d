/// Tabular report assembly on top of the `ReportWriter` port
mod report_builder;

pub use report_builder::ReportBuilder;
