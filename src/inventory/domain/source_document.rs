use std::path::{Path, PathBuf};

/// One AIDA64 report file, already decoded to UTF-8.
///
/// The relative path (relative to the scanned root) is the identity of the
/// document within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    absolute_path: PathBuf,
    relative_path: String,
    content: String,
}

impl SourceDocument {
    pub fn new(absolute_path: PathBuf, relative_path: String, content: String) -> Self {
        Self {
            absolute_path,
            relative_path,
            content,
        }
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
