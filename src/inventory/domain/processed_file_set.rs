use std::collections::HashSet;

/// Relative paths already turned into records during the current run.
///
/// Scoped to one pipeline invocation; never persisted.
#[derive(Debug, Default)]
pub struct ProcessedFileSet {
    paths: HashSet<String>,
}

impl ProcessedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `relative_path` as processed.
    ///
    /// Returns `false` when the path was already present.
    pub fn insert(&mut self, relative_path: &str) -> bool {
        self.paths.insert(relative_path.to_string())
    }

    pub fn contains(&self, relative_path: &str) -> bool {
        self.paths.contains(relative_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_first_sighting_only() {
        let mut set = ProcessedFileSet::new();
        assert!(set.is_empty());
        assert!(set.insert("a/report.htm"));
        assert!(!set.insert("a/report.htm"));
        assert!(set.insert("b/report.htm"));
        assert_eq!(set.len(), 2);
        assert!(set.contains("a/report.htm"));
        assert!(!set.contains("c/report.htm"));
    }
}
