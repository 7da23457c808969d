/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;

pub use file_reader::{FileSystemReader, REPORT_EXTENSIONS};
pub use file_writer::{prepare_output_path, StdoutPresenter};
