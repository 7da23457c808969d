use crate::inventory::domain::ReportRow;
use crate::inventory::policies::ReportLayout;
use crate::shared::Result;
use std::path::Path;

/// ReportWriter port for the tabular output artifact
///
/// Rows are addressed zero-based; row 0 is the header written by
/// `write_header`.
pub trait ReportWriter {
    /// Writes the header row and applies column widths and page setup
    fn write_header(&mut self, layout: &ReportLayout) -> Result<()>;

    /// Writes one formatted data row
    fn write_row(&mut self, row: u32, data: &ReportRow, layout: &ReportLayout) -> Result<()>;

    /// Sets the height of `row` in points
    fn set_row_height(&mut self, row: u32, height: f64) -> Result<()>;

    /// Persists the artifact
    ///
    /// # Errors
    /// Any failure here is fatal for the run.
    fn save(&mut self, output_path: &Path) -> Result<()>;
}
