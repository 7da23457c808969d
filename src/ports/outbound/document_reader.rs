use crate::inventory::domain::SourceDocument;
use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for loading one report file
pub trait DocumentReader {
    /// Reads and decodes `path`, recording its path relative to `root`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read (missing, not a regular
    /// file, too large, I/O failure). Undecodable bytes are not an error.
    fn read_document(&self, root: &Path, path: &Path) -> Result<SourceDocument>;
}
