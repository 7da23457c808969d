/// How a body cell is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Thin border, vertically centered
    Centered,
    /// Thin border, top-aligned with word wrap (multi-line software lists)
    WrappedTop,
}

/// One spreadsheet column: header title, width in character units and
/// body style.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub title: &'static str,
    pub width: f64,
    pub style: CellStyle,
}

/// Row height estimate for the application-software column.
///
/// The height only depends on the character count of the cell, so it is
/// monotonically non-decreasing in that count and always stays within
/// `[min_height, max_height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowHeightPolicy {
    pub chars_per_line: usize,
    pub line_height: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl RowHeightPolicy {
    pub fn height_for(&self, text: &str) -> f64 {
        let chars = text.chars().count();
        let lines = chars / self.chars_per_line.max(1) + 1;
        (lines as f64 * self.line_height).clamp(self.min_height, self.max_height)
    }
}

impl Default for RowHeightPolicy {
    fn default() -> Self {
        Self {
            // 60-unit column at roughly 7 units per character
            chars_per_line: 60 / 7,
            line_height: 18.0,
            min_height: 30.0,
            max_height: 1200.0,
        }
    }
}

/// Fixed layout of the results sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub sheet_name: &'static str,
    pub landscape: bool,
    pub columns: Vec<ColumnSpec>,
    /// Column whose content drives the row height
    pub height_column: usize,
    pub row_height: RowHeightPolicy,
}

impl ReportLayout {
    /// Zero-based spreadsheet row of the `sequence`-th record; row 0 holds the header.
    pub fn data_row(sequence: u32) -> u32 {
        sequence
    }
}

impl Default for ReportLayout {
    fn default() -> Self {
        let column = |title, width, style| ColumnSpec {
            title,
            width,
            style,
        };
        Self {
            sheet_name: "Результаты анализа",
            landscape: true,
            columns: vec![
                column("№", 5.0, CellStyle::Centered),
                column("Имя файла", 40.0, CellStyle::Centered),
                column("Тип ПК", 20.0, CellStyle::Centered),
                column("Операционная система", 60.0, CellStyle::Centered),
                column("Прикладное ПО", 60.0, CellStyle::WrappedTop),
                column("Защитное ПО", 60.0, CellStyle::WrappedTop),
                column("Пользователи", 40.0, CellStyle::Centered),
            ],
            height_column: 4,
            row_height: RowHeightPolicy::default(),
        }
    }
}
