use crate::inventory::domain::{ExtractedRecord, ReportRow};
use crate::inventory::policies::ReportLayout;
use crate::inventory::services::SoftwareClassifier;
use crate::ports::outbound::ReportWriter;
use crate::shared::Result;
use std::path::Path;
use tracing::debug;

/// ReportBuilder - Owns the output table for one run
///
/// Writes the header on creation, appends one formatted row per record
/// and, once all rows are in, sizes every row by the length of its
/// application-software cell.
pub struct ReportBuilder<W> {
    writer: W,
    layout: ReportLayout,
    classifier: SoftwareClassifier,
    /// Spreadsheet row and text of the height-driving cell
    written: Vec<(u32, String)>,
}

impl<W: ReportWriter> ReportBuilder<W> {
    /// Writes the header row and page setup, then returns the builder.
    pub fn create(
        mut writer: W,
        layout: ReportLayout,
        classifier: SoftwareClassifier,
    ) -> Result<Self> {
        writer.write_header(&layout)?;
        Ok(Self {
            writer,
            layout,
            classifier,
            written: Vec::new(),
        })
    }

    /// Formats `record` and writes it as the `sequence`-th data row.
    pub fn append_row(&mut self, sequence: u32, record: &ExtractedRecord) -> Result<()> {
        let security = self.classifier.security_subset(record.software());
        let row = ReportRow::new(sequence, record, &security);
        let sheet_row = ReportLayout::data_row(sequence);
        self.writer.write_row(sheet_row, &row, &self.layout)?;

        let height_text = self
            .layout
            .height_column
            .checked_sub(1)
            .and_then(|i| row.text_cells().get(i).map(|s| s.to_string()))
            .unwrap_or_default();
        self.written.push((sheet_row, height_text));
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.written.len()
    }

    /// Sets the height of every written row.
    pub fn finalize_row_heights(&mut self) -> Result<()> {
        for (row, text) in &self.written {
            let height = self.layout.row_height.height_for(text);
            debug!(row, height, "Row height");
            self.writer.set_row_height(*row, height)?;
        }
        Ok(())
    }

    pub fn save(&mut self, output_path: &Path) -> Result<()> {
        self.writer.save(output_path)
    }

    #[cfg(test)]
    pub(crate) fn writer(&self) -> &W {
        &self.writer
    }
}
