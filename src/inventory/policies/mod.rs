mod report_layout;

pub use report_layout::{CellStyle, ColumnSpec, ReportLayout, RowHeightPolicy};
