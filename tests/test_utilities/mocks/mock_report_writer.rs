use aida_report::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Default, Debug)]
pub struct WrittenReport {
    pub header: Vec<String>,
    pub sheet_name: String,
    pub rows: Vec<(u32, ReportRow)>,
    pub heights: Vec<(u32, f64)>,
    pub saved_to: Option<PathBuf>,
}

/// Mock ReportWriter recording everything written to it
///
/// Clones share the recording, so a test keeps one handle while the use
/// case consumes the other.
#[derive(Default, Clone)]
pub struct MockReportWriter {
    report: Arc<Mutex<WrittenReport>>,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.report
            .lock()
            .unwrap()
            .rows
            .iter()
            .map(|(_, row)| row.clone())
            .collect()
    }

    pub fn with_report<T>(&self, f: impl FnOnce(&WrittenReport) -> T) -> T {
        f(&self.report.lock().unwrap())
    }
}

impl ReportWriter for MockReportWriter {
    fn write_header(&mut self, layout: &ReportLayout) -> Result<()> {
        let mut report = self.report.lock().unwrap();
        report.sheet_name = layout.sheet_name.to_string();
        report.header = layout.columns.iter().map(|c| c.title.to_string()).collect();
        Ok(())
    }

    fn write_row(&mut self, row: u32, data: &ReportRow, _layout: &ReportLayout) -> Result<()> {
        self.report.lock().unwrap().rows.push((row, data.clone()));
        Ok(())
    }

    fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        self.report.lock().unwrap().heights.push((row, height));
        Ok(())
    }

    fn save(&mut self, output_path: &Path) -> Result<()> {
        self.report.lock().unwrap().saved_to = Some(output_path.to_path_buf());
        Ok(())
    }
}
