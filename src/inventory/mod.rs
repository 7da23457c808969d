/// Inventory domain: the records pulled out of AIDA64 pages, the rules that
/// classify them and the policies that shape the spreadsheet.
///
/// Nothing in this module touches the file system.
pub mod domain;
pub mod policies;
pub mod services;
