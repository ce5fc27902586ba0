use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error while {stage} '{}': {source}", path.display())]
    IoError {
        stage: IoStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema error: expected a JSON array at the document root, found {found}")]
    InvalidRootError { found: &'static str },

    #[error("Schema error at record {index}: {message}")]
    RecordSchemaError { index: usize, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoStage {
    Reading,
    Writing,
}

impl std::fmt::Display for IoStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoStage::Reading => f.write_str("reading"),
            IoStage::Writing => f.write_str("writing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Schema,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn io(stage: IoStage, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EtlError::IoError {
            stage,
            path: path.into(),
            source,
        }
    }

    pub fn record(index: usize, message: impl Into<String>) -> Self {
        EtlError::RecordSchemaError {
            index,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError { .. } | EtlError::CsvError(_) => ErrorCategory::Io,
            EtlError::ParseError { .. } => ErrorCategory::Parse,
            EtlError::InvalidRootError { .. } | EtlError::RecordSchemaError { .. } => {
                ErrorCategory::Schema
            }
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Parse | ErrorCategory::Schema | ErrorCategory::Config => {
                ErrorSeverity::High
            }
        }
    }

    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError { stage, path, source } => {
                format!("Could not finish {} '{}': {}", stage, path.display(), source)
            }
            EtlError::ParseError { path, source } => format!(
                "'{}' is not valid JSON (line {}, column {})",
                path.display(),
                source.line(),
                source.column()
            ),
            EtlError::InvalidRootError { found } => {
                format!("The input must be a JSON array of records, but it is {}", found)
            }
            EtlError::RecordSchemaError { index, message } => {
                format!("Record #{} is malformed: {}", index, message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::IoError {
                stage: IoStage::Reading,
                ..
            } => "Check that the input file exists and is readable",
            EtlError::IoError {
                stage: IoStage::Writing,
                ..
            }
            | EtlError::CsvError(_) => {
                "Check that the output directory exists, is writable and has free space"
            }
            EtlError::ParseError { .. } => "Fix the JSON syntax at the reported position",
            EtlError::InvalidRootError { .. } => {
                "Wrap the records in a top-level JSON array: [{...}, {...}]"
            }
            EtlError::RecordSchemaError { .. } => {
                "Make sure every record has text 'question' and 'answer' fields"
            }
            EtlError::InvalidConfigValueError { .. } => "Correct the configuration value",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_and_severity() {
        let io = EtlError::io(
            IoStage::Reading,
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);

        let schema = EtlError::record(3, "missing required field 'answer'");
        assert_eq!(schema.category(), ErrorCategory::Schema);
        assert_eq!(schema.severity(), ErrorSeverity::High);

        let root = EtlError::InvalidRootError { found: "an object" };
        assert_eq!(root.category(), ErrorCategory::Schema);
    }

    #[test]
    fn test_messages_name_stage_and_record() {
        let io = EtlError::io(
            IoStage::Writing,
            "out/data.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = io.to_string();
        assert!(msg.contains("writing"));
        assert!(msg.contains("out/data.csv"));

        let schema = EtlError::record(0, "missing required field 'answer'");
        assert_eq!(
            schema.to_string(),
            "Schema error at record 0: missing required field 'answer'"
        );
        assert!(schema.user_friendly_message().contains("#0"));
    }

    #[test]
    fn test_parse_error_reports_position() {
        let source = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err = EtlError::ParseError {
            path: PathBuf::from("in.json"),
            source,
        };
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert!(err.user_friendly_message().contains("line 1"));
    }
}
