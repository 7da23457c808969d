use crate::application::dto::ReportResponse;
use crate::ports::outbound::SummaryFormatter;
use crate::shared::Result;
use std::fmt::Write;
use std::path::Path;

/// TextSummaryFormatter adapter producing a short human-readable summary
pub struct TextSummaryFormatter;

impl TextSummaryFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextSummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for TextSummaryFormatter {
    fn format(&self, input_directory: &Path, response: &ReportResponse) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Input directory: {}", input_directory.display())?;
        writeln!(out, "Report:          {}", response.output_path.display())?;
        writeln!(
            out,
            "Files:           {} found, {} processed",
            response.total, response.processed
        )?;
        writeln!(out, "Rows written:    {}", response.written_rows)?;
        writeln!(out, "Skipped:         {}", response.skipped)?;
        writeln!(out, "Failed:          {}", response.failed)?;
        if response.cancelled {
            writeln!(out, "Run was cancelled before all files were processed")?;
        }
        Ok(out)
    }
}
