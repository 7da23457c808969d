/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod report;
mod report_job;
pub mod use_cases;

pub use report_job::ReportJob;
