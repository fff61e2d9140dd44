use crate::errors::CompareError;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `path` against the working directory and check it names an
/// existing regular file.
pub fn normalize_existing_file(path: &Path) -> Result<PathBuf, CompareError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| CompareError::io(path, e))?
            .join(path)
    };
    if !absolute.exists() {
        return Err(CompareError::NotFound { path: absolute });
    }
    if !absolute.is_file() {
        return Err(CompareError::NotAFile { path: absolute });
    }
    Ok(fs::canonicalize(&absolute).unwrap_or(absolute))
}

/// Like [`normalize_existing_file`], but also requires one of `allowed`
/// (lower-case, no leading dot) as the file extension.
pub fn normalize_workbook_path(path: &Path, allowed: &[String]) -> Result<PathBuf, CompareError> {
    let file = normalize_existing_file(path)?;
    let matches = file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .map(|ext| allowed.contains(&ext))
        .unwrap_or(false);
    if !matches {
        return Err(CompareError::UnsupportedExtension {
            path: file,
            allowed: allowed.to_vec(),
        });
    }
    Ok(file)
}

/// Resolve an output path; its parent directory must already exist.
pub fn normalize_destination_path(path: &Path) -> Result<PathBuf, CompareError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| CompareError::io(path, e))?
            .join(path)
    };
    if let Some(parent) = absolute.parent()
        && !parent.exists()
    {
        return Err(CompareError::NotFound {
            path: parent.to_path_buf(),
        });
    }
    Ok(absolute)
}

/// File name used to label a workbook in messages and output.
pub fn display_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
