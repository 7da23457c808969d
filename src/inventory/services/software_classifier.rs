use crate::inventory::domain::SecurityKeywordSet;

/// SoftwareClassifier - decides whether a software entry is protective software
///
/// Matching is a case-insensitive substring test against the keyword set;
/// it is not word-bounded, so `"nod"` also matches inside `"NOD32"`.
#[derive(Debug, Clone, Default)]
pub struct SoftwareClassifier {
    keywords: SecurityKeywordSet,
}

impl SoftwareClassifier {
    pub fn new(keywords: SecurityKeywordSet) -> Self {
        Self { keywords }
    }

    pub fn is_security_software(&self, entry: &str) -> bool {
        let lowered = entry.to_lowercase();
        self.keywords
            .keywords()
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }

    /// Returns the entries accepted by the classifier, in input order.
    pub fn security_subset<'a>(&self, entries: &'a [String]) -> Vec<&'a str> {
        entries
            .iter()
            .map(String::as_str)
            .filter(|entry| self.is_security_software(entry))
            .collect()
    }
}
