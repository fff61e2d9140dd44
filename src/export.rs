use crate::errors::CompareError;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXPORT_FILE: &str = "invalid-results.txt";

/// Newline-joined UTF-8, no trailing newline.
pub fn format_export<S: AsRef<str>>(values: &[S]) -> Vec<u8> {
    let mut out = Vec::new();
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push(b'\n');
        }
        out.extend_from_slice(value.as_ref().as_bytes());
    }
    out
}

/// Write `values` to `path`, replacing any existing file.
pub fn write_export<S: AsRef<str>>(path: &Path, values: &[S]) -> Result<PathBuf, CompareError> {
    std::fs::write(path, format_export(values)).map_err(|e| CompareError::io(path, e))?;
    tracing::info!(path = %path.display(), values = values.len(), "exported invalid values");
    Ok(path.to_path_buf())
}
