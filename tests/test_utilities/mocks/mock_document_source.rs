use aida_report::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock DocumentCollector + DocumentReader serving pages from memory
///
/// Files are returned in insertion order. Files added with
/// `with_unreadable` are collected but fail to read.
#[derive(Default, Clone)]
pub struct MockDocumentSource {
    order: Vec<PathBuf>,
    pages: HashMap<PathBuf, String>,
}

impl MockDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, root: &Path, relative: &str, content: String) -> Self {
        let path = root.join(relative);
        self.order.push(path.clone());
        self.pages.insert(path, content);
        self
    }

    pub fn with_unreadable(mut self, root: &Path, relative: &str) -> Self {
        self.order.push(root.join(relative));
        self
    }
}

impl DocumentCollector for MockDocumentSource {
    fn collect_documents(&self, _root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.order.clone())
    }
}

impl DocumentReader for MockDocumentSource {
    fn read_document(&self, root: &Path, path: &Path) -> Result<SourceDocument> {
        let content = self
            .pages
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("Failed to read document: {}", path.display()))?;
        let relative = path.strip_prefix(root).unwrap_or(path);
        Ok(SourceDocument::new(
            path.to_path_buf(),
            relative.to_string_lossy().into_owned(),
            content.clone(),
        ))
    }
}
