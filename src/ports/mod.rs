/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the interfaces the report pipeline uses to reach
/// the file system, the spreadsheet writer and the user's terminal.
pub mod outbound;
