use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish between argument mistakes
/// and failures that happened while building the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The report was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing input directory, unwritable output, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for report generation.
///
/// Only the fatal outcomes of a run and the per-document read failure
/// are modelled here; everything else travels as `anyhow::Error`.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid input directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify a directory that contains AIDA64 HTML reports")]
    InvalidInputDirectory { path: PathBuf, reason: String },

    #[error("Cannot create report file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the location is writable")]
    OutputPathError { path: PathBuf, details: String },

    #[error("Failed to save report: {path}\nDetails: {details}\n\n💡 Hint: Make sure the file is not open in another program")]
    ReportSaveError { path: PathBuf, details: String },

    #[error("Failed to read document: {path}\nDetails: {details}")]
    DocumentReadError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
