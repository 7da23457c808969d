use crate::inventory::domain::SourceDocument;
use crate::ports::outbound::{DocumentCollector, DocumentReader};
use crate::shared::error::ReportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use encoding_rs::WINDOWS_1251;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File extensions (compared case-insensitively) that mark an AIDA64 page
pub const REPORT_EXTENSIONS: &[&str] = &["htm", "html"];

/// FileSystemReader adapter for discovering and reading report files
///
/// This adapter implements both DocumentCollector and DocumentReader.
/// The walk is depth-first with the entries of every directory sorted by
/// file name, so the same tree always yields the same order. Symbolic
/// links to files are collected like the files themselves; symbolic links
/// to directories are not descended into.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn is_report_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                REPORT_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false)
    }

    /// Decodes Windows-1251 bytes, dropping anything that does not map.
    fn decode(bytes: &[u8], path: &Path) -> String {
        let (text, had_errors) = WINDOWS_1251.decode_without_bom_handling(bytes);
        if had_errors {
            warn!(
                file = %path.display(),
                "Document contains bytes that are not valid Windows-1251; they were dropped"
            );
            text.chars().filter(|c| *c != char::REPLACEMENT_CHARACTER).collect()
        } else {
            text.into_owned()
        }
    }

    fn relative_path(root: &Path, path: &Path) -> String {
        path.strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentCollector for FileSystemReader {
    fn collect_documents(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(ReportError::InvalidInputDirectory {
                        path: root.to_path_buf(),
                        reason: e.to_string(),
                    }
                    .into());
                }
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };

            let file_type = entry.file_type();
            let is_file = if file_type.is_symlink() {
                // follows the link; dangling links report false
                let target_is_file = entry.path().is_file();
                if !target_is_file {
                    debug!(path = %entry.path().display(), "Skipping symbolic link that does not point to a file");
                }
                target_is_file
            } else {
                file_type.is_file()
            };
            if !is_file {
                continue;
            }

            if Self::is_report_file(entry.path()) {
                documents.push(entry.into_path());
            }
        }

        Ok(documents)
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, root: &Path, path: &Path) -> Result<SourceDocument> {
        let read = || -> Result<Vec<u8>> {
            let size = validate_regular_file(path)?;
            validate_file_size(size, path, MAX_FILE_SIZE)?;
            Ok(fs::read(path)?)
        };

        let bytes = read().map_err(|e| ReportError::DocumentReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(SourceDocument::new(
            path.to_path_buf(),
            Self::relative_path(root, path),
            Self::decode(&bytes, path),
        ))
    }
}
