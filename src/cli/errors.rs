use crate::errors::{CompareError, SessionError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub try_this: Option<String>,
}

impl ErrorEnvelope {
    fn new(code: &str, message: String, try_this: Option<String>) -> Self {
        Self {
            code: code.to_string(),
            message,
            try_this,
        }
    }
}

pub fn envelope_for(error: &anyhow::Error) -> ErrorEnvelope {
    let message = error.to_string();

    if let Some(compare_error) = error.downcast_ref::<CompareError>() {
        return match compare_error {
            CompareError::Parse { .. } => ErrorEnvelope::new(
                "PARSE_ERROR",
                message,
                Some("make sure both files are valid Excel workbooks (.xlsx or .xls)".to_string()),
            ),
            CompareError::NotFound { .. } => ErrorEnvelope::new(
                "FILE_NOT_FOUND",
                message,
                Some("check the workbook path and permissions".to_string()),
            ),
            CompareError::NotAFile { .. } => ErrorEnvelope::new(
                "NOT_A_FILE",
                message,
                Some("pass a workbook file, not a directory".to_string()),
            ),
            CompareError::UnsupportedExtension { allowed, .. } => ErrorEnvelope::new(
                "UNSUPPORTED_EXTENSION",
                message,
                Some(format!(
                    "use a file ending in one of: {}, or widen --extensions",
                    allowed.join(", ")
                )),
            ),
            CompareError::Io { .. } => ErrorEnvelope::new("IO_ERROR", message, None),
            CompareError::Task(_) => ErrorEnvelope::new("COMMAND_FAILED", message, None),
        };
    }

    if error.downcast_ref::<SessionError>().is_some() {
        return ErrorEnvelope::new("INVALID_STATE", message, None);
    }

    if message.contains("at least one file extension") {
        return ErrorEnvelope::new(
            "INVALID_ARGUMENT",
            message,
            Some("pass a list such as `--extensions xlsx,xls`".to_string()),
        );
    }

    if message.contains("config") {
        return ErrorEnvelope::new(
            "INVALID_CONFIG",
            message,
            Some("config files must be YAML (.yaml/.yml) or JSON (.json)".to_string()),
        );
    }

    ErrorEnvelope::new("COMMAND_FAILED", message, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_file_maps_to_file_not_found() {
        let error: anyhow::Error = CompareError::NotFound {
            path: PathBuf::from("/nope/source.xlsx"),
        }
        .into();
        let envelope = envelope_for(&error);
        assert_eq!(envelope.code, "FILE_NOT_FOUND");
        assert!(envelope.message.contains("/nope/source.xlsx"));
    }

    #[test]
    fn busy_session_maps_to_invalid_state() {
        let error: anyhow::Error = SessionError::Busy.into();
        assert_eq!(envelope_for(&error).code, "INVALID_STATE");
    }

    #[test]
    fn unknown_errors_fall_back_to_command_failed() {
        let error = anyhow::anyhow!("something odd");
        let envelope = envelope_for(&error);
        assert_eq!(envelope.code, "COMMAND_FAILED");
        assert!(envelope.try_this.is_none());
    }
}
