use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ReportError;
use crate::shared::security::validate_output_target;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Makes sure the report can be created at `output_path`.
///
/// Missing parent directories are created. The target itself must not
/// be a symbolic link or a directory.
///
/// # Errors
/// Returns `ReportError::OutputPathError` if the location cannot be
/// prepared; the run must not start in that case.
pub fn prepare_output_path(output_path: &Path) -> Result<()> {
    let fail = |details: String| ReportError::OutputPathError {
        path: output_path.to_path_buf(),
        details,
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                fail(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    validate_output_target(output_path).map_err(|e| fail(e.to_string()))?;
    Ok(())
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
