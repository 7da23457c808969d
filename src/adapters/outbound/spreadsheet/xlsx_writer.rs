use crate::inventory::domain::ReportRow;
use crate::inventory::policies::{CellStyle, ReportLayout};
use crate::ports::outbound::ReportWriter;
use crate::shared::error::ReportError;
use crate::shared::Result;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

/// Cell formats shared by every row of the sheet
struct CellFormats {
    header: Format,
    centered: Format,
    wrapped_top: Format,
}

impl CellFormats {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            centered: Format::new()
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::VerticalCenter),
            wrapped_top: Format::new()
                .set_border(FormatBorder::Thin)
                .set_text_wrap()
                .set_align(FormatAlign::Top),
        }
    }

    fn body(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Centered => &self.centered,
            CellStyle::WrappedTop => &self.wrapped_top,
        }
    }
}

/// XlsxReportWriter adapter producing an `.xlsx` workbook
///
/// Holds a single worksheet in memory; nothing touches the disk until
/// `save` is called.
pub struct XlsxReportWriter {
    workbook: Workbook,
    formats: CellFormats,
}

impl XlsxReportWriter {
    pub fn new() -> Self {
        let mut workbook = Workbook::new();
        workbook.add_worksheet();
        Self {
            workbook,
            formats: CellFormats::new(),
        }
    }

    fn sheet(&mut self) -> Result<&mut Worksheet> {
        Ok(self.workbook.worksheet_from_index(0)?)
    }
}

impl Default for XlsxReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for XlsxReportWriter {
    fn write_header(&mut self, layout: &ReportLayout) -> Result<()> {
        let header = self.formats.header.clone();
        let sheet = self.sheet()?;
        sheet.set_name(layout.sheet_name)?;
        if layout.landscape {
            sheet.set_landscape();
        }

        for (col, column) in layout.columns.iter().enumerate() {
            let col = u16::try_from(col)?;
            sheet.write_string_with_format(0, col, column.title, &header)?;
            sheet.set_column_width(col, column.width)?;
        }
        Ok(())
    }

    fn write_row(&mut self, row: u32, data: &ReportRow, layout: &ReportLayout) -> Result<()> {
        let style_of = |col: usize| {
            layout
                .columns
                .get(col)
                .map(|c| c.style)
                .unwrap_or(CellStyle::Centered)
        };
        let number_format = self.formats.body(style_of(0)).clone();
        let text_formats: Vec<Format> = (1..=data.text_cells().len())
            .map(|col| self.formats.body(style_of(col)).clone())
            .collect();

        let sheet = self.sheet()?;
        sheet.write_number_with_format(row, 0, data.sequence, &number_format)?;

        for (i, (text, format)) in data.text_cells().iter().zip(&text_formats).enumerate() {
            let col = u16::try_from(i + 1)?;
            if text.is_empty() {
                sheet.write_blank(row, col, format)?;
            } else {
                sheet.write_string_with_format(row, col, *text, format)?;
            }
        }
        Ok(())
    }

    fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        self.sheet()?.set_row_height(row, height)?;
        Ok(())
    }

    fn save(&mut self, output_path: &Path) -> Result<()> {
        self.workbook
            .save(output_path)
            .map_err(|e| ReportError::ReportSaveError {
                path: output_path.to_path_buf(),
                details: e.to_string(),
            })?;
        Ok(())
    }
}
