use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("failed to read '{label}' as a spreadsheet: {source}")]
    Parse {
        label: String,
        #[source]
        source: calamine::Error,
    },

    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("path '{}' is not a file", path.display())]
    NotAFile { path: PathBuf },

    #[error("file '{}' does not match allowed extensions {allowed:?}", path.display())]
    UnsupportedExtension { path: PathBuf, allowed: Vec<String> },

    #[error("comparison task failed: {0}")]
    Task(String),
}

impl CompareError {
    pub fn parse(label: impl Into<String>, source: calamine::Error) -> Self {
        Self::Parse {
            label: label.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<tokio::task::JoinError> for CompareError {
    fn from(err: tokio::task::JoinError) -> Self {
        CompareError::Task(err.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a comparison is already in progress")]
    Busy,

    #[error("no {0} file selected")]
    MissingInput(&'static str),
}
