pub mod extracted_record;
pub mod processed_file_set;
pub mod report_row;
pub mod security_keywords;
pub mod source_document;

pub use extracted_record::ExtractedRecord;
pub use processed_file_set::ProcessedFileSet;
pub use report_row::ReportRow;
pub use security_keywords::SecurityKeywordSet;
pub use source_document::SourceDocument;
