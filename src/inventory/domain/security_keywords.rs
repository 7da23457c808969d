use crate::shared::error::ReportError;
use crate::shared::Result;

/// Built-in vendor/product fragments that mark protective software.
const DEFAULT_SECURITY_KEYWORDS: &[&str] = &[
    "dallas",
    "dr.web",
    "eset",
    "kaspersky",
    "nod",
    "secret net",
    "security studio endpoint protection",
    "vipnet client",
    "континент-ап",
    "криптопро",
];

/// Maximum number of keywords accepted from configuration
const MAX_KEYWORDS: usize = 256;

/// Maximum length of a single keyword
const MAX_KEYWORD_LENGTH: usize = 255;

/// Immutable set of lower-cased keyword fragments.
///
/// Keywords are normalized once at construction so matching only has to
/// lower-case the software entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityKeywordSet {
    keywords: Vec<String>,
}

impl SecurityKeywordSet {
    /// Builds a set from raw keywords.
    ///
    /// # Errors
    /// - more than `MAX_KEYWORDS` keywords
    /// - an empty (or whitespace-only) keyword
    /// - a keyword longer than `MAX_KEYWORD_LENGTH` bytes
    pub fn new(keywords: Vec<String>) -> Result<Self> {
        if keywords.len() > MAX_KEYWORDS {
            return Err(ReportError::Validation {
                message: format!(
                    "Too many security keywords: {} (maximum: {})",
                    keywords.len(),
                    MAX_KEYWORDS
                ),
            }
            .into());
        }

        let mut normalized: Vec<String> = Vec::with_capacity(keywords.len());
        for (i, keyword) in keywords.iter().enumerate() {
            let trimmed = keyword.trim();
            if trimmed.is_empty() {
                return Err(ReportError::Validation {
                    message: format!("security keyword #{} must not be empty", i + 1),
                }
                .into());
            }
            if trimmed.len() > MAX_KEYWORD_LENGTH {
                return Err(ReportError::Validation {
                    message: format!(
                        "security keyword #{} is too long ({} bytes, maximum: {})",
                        i + 1,
                        trimmed.len(),
                        MAX_KEYWORD_LENGTH
                    ),
                }
                .into());
            }
            let lowered = trimmed.to_lowercase();
            if !normalized.contains(&lowered) {
                normalized.push(lowered);
            }
        }

        Ok(Self {
            keywords: normalized,
        })
    }

    /// Returns a new set holding these keywords followed by `extra`.
    pub fn with_additional(&self, extra: Vec<String>) -> Result<Self> {
        let mut all = self.keywords.clone();
        all.extend(extra);
        Self::new(all)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for SecurityKeywordSet {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_SECURITY_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords_are_lowercase() {
        let set = SecurityKeywordSet::default();
        assert_eq!(set.len(), 10);
        for keyword in set.keywords() {
            assert_eq!(keyword, &keyword.to_lowercase());
        }
    }

    #[test]
    fn test_new_normalizes_case_and_whitespace() {
        let set = SecurityKeywordSet::new(vec![
            "  Dr.Web ".to_string(),
            "ViPNet Client".to_string(),
        ])
        .unwrap();
        assert_eq!(set.keywords(), &["dr.web", "vipnet client"]);
    }

    #[test]
    fn test_new_drops_duplicates_after_normalization() {
        let set =
            SecurityKeywordSet::new(vec!["ESET".to_string(), "eset".to_string()]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_new_rejects_empty_keyword() {
        let result = SecurityKeywordSet::new(vec!["eset".to_string(), "   ".to_string()]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("#2 must not be empty"));
    }

    #[test]
    fn test_new_rejects_too_many_keywords() {
        let keywords = (0..=MAX_KEYWORDS).map(|i| format!("kw{}", i)).collect();
        let result = SecurityKeywordSet::new(keywords);
        assert!(result.unwrap_err().to_string().contains("Too many"));
    }

    #[test]
    fn test_new_rejects_overlong_keyword() {
        let result = SecurityKeywordSet::new(vec!["x".repeat(MAX_KEYWORD_LENGTH + 1)]);
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_with_additional_appends() {
        let set = SecurityKeywordSet::default()
            .with_additional(vec!["Avast".to_string()])
            .unwrap();
        assert_eq!(set.len(), 11);
        assert_eq!(set.keywords().last().unwrap(), "avast");
    }

    #[test]
    fn test_empty_set_is_allowed() {
        let set = SecurityKeywordSet::new(vec![]).unwrap();
        assert!(set.is_empty());
    }
}
