//! aida-report - Inventory spreadsheet builder for AIDA64 HTML reports
//!
//! This library walks a directory of AIDA64 "report" pages, extracts the
//! machine name, operating system, installed software and user accounts
//! of every page, flags security software, and writes one `.xlsx`
//! workbook with one row per page. It follows hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`inventory`): records, keyword sets, extraction and layout rules
//! - **Application Layer** (`application`): the report use case, builder and background job
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): file system, spreadsheet, console and summary formatters
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use aida_report::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let rows = aida_report::run(
//!     Path::new("reports"),
//!     Path::new("reports/results.xlsx"),
//!     StderrProgressReporter::new(),
//! )?;
//! println!("{} row(s) written", rows);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod logging;
pub mod ports;
pub mod shared;

use adapters::outbound::filesystem::{prepare_output_path, FileSystemReader};
use adapters::outbound::spreadsheet::XlsxReportWriter;
use application::dto::{ReportRequest, ReportResponse};
use application::use_cases::GenerateReportUseCase;
use inventory::domain::SecurityKeywordSet;
use inventory::services::{ExtractionLabels, FieldExtractor, SoftwareClassifier};
use ports::outbound::ProgressReporter;
use shared::security::validate_input_directory;
use shared::Result;
use std::path::Path;

/// Builds the report for `input_directory` into `output_path`.
///
/// Uses the built-in labels and security keywords and returns the number
/// of rows written.
///
/// # Errors
/// Fails if the input directory is invalid, the output location cannot
/// be created, or the workbook cannot be saved. Problems with individual
/// files are logged and reported, never returned.
pub fn run<P: ProgressReporter>(
    input_directory: &Path,
    output_path: &Path,
    reporter: P,
) -> Result<usize> {
    let request = ReportRequest::new(input_directory.to_path_buf(), output_path.to_path_buf());
    let response = generate_report(request, SecurityKeywordSet::default(), reporter)?;
    Ok(response.written_rows)
}

/// Runs one report request with the given keyword set and the default
/// file system and XLSX adapters.
pub fn generate_report<P: ProgressReporter>(
    request: ReportRequest,
    security_keywords: SecurityKeywordSet,
    reporter: P,
) -> Result<ReportResponse> {
    validate_input_directory(&request.input_directory)?;
    prepare_output_path(&request.output_path)?;

    let use_case = GenerateReportUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        XlsxReportWriter::new(),
        reporter,
        FieldExtractor::new(ExtractionLabels::default())?,
        SoftwareClassifier::new(security_keywords),
    );
    use_case.execute(request)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        ChannelProgressReporter, ProgressEvent, StderrProgressReporter,
    };
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonSummaryFormatter, TextSummaryFormatter};
    pub use crate::adapters::outbound::spreadsheet::XlsxReportWriter;
    pub use crate::application::dto::{CancelFlag, ReportRequest, ReportResponse, SummaryFormat};
    pub use crate::application::report::ReportBuilder;
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::application::ReportJob;
    pub use crate::inventory::domain::{
        ExtractedRecord, ProcessedFileSet, ReportRow, SecurityKeywordSet, SourceDocument,
    };
    pub use crate::inventory::policies::{ReportLayout, RowHeightPolicy};
    pub use crate::inventory::services::{ExtractionLabels, FieldExtractor, SoftwareClassifier};
    pub use crate::ports::outbound::{
        DocumentCollector, DocumentReader, OutputPresenter, ProgressReporter, ReportWriter,
        SummaryFormatter,
    };
    pub use crate::shared::Result;
}
