use crate::shared::Result;
use std::path::{Path, PathBuf};

/// DocumentCollector port for discovering report files
///
/// Implementations decide the traversal order; the order they return is
/// the order rows appear in the report, so it must be deterministic.
pub trait DocumentCollector {
    /// Lists every candidate report file below `root`
    ///
    /// # Errors
    /// Returns an error if `root` cannot be traversed at all.
    fn collect_documents(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
