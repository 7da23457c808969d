use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for a single input report (100 MB).
///
/// AIDA64 pages are a few hundred kilobytes; anything larger is not a
/// report and would only be buffered into memory for nothing.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path resolves to a regular file.
///
/// Uses `metadata()`, so a symbolic link is judged by its target: a link
/// to a regular file passes, a dangling link or a link to a directory
/// does not.
///
/// # Errors
/// Returns an error if the metadata cannot be read or the path does not
/// resolve to a regular file. On success the file size is returned so the
/// caller can check it without a second metadata call.
pub fn validate_regular_file(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata of {}: {}", path.display(), e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates that an output target is not a symbolic link.
///
/// A target that does not exist yet is accepted.
pub fn validate_output_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. Writing through symbolic links is not allowed.",
            path.display()
        ),
        Ok(metadata) if metadata.is_dir() => {
            anyhow::bail!("{} is a directory", path.display())
        }
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow::anyhow!(
            "Failed to read metadata of {}: {}",
            path.display(),
            e
        )),
    }
}

/// Validates the directory a run scans.
///
/// The directory must exist, must not itself be a symbolic link and must
/// resolve to a directory.
///
/// # Errors
/// Returns `ReportError::InvalidInputDirectory` describing the first
/// check that failed.
pub fn validate_input_directory(path: &Path) -> Result<()> {
    let invalid = |reason: String| ReportError::InvalidInputDirectory {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(invalid("Directory does not exist".to_string()).into());
        }
        Err(e) => return Err(invalid(format!("Failed to read path metadata: {}", e)).into()),
    };

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Input path is a symbolic link. Symbolic links are not followed.".to_string(),
        )
        .into());
    }

    if !metadata.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}
