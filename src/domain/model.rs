use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Output column order.
pub const HEADER: [&str; 2] = ["question", "answer"];

/// One question/answer pair, already projected onto the two output columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
}

impl QaRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Validate one element of the input array and project it onto
    /// `question` and `answer`. Any other keys are dropped.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            EtlError::record(
                index,
                format!("expected a JSON object, found {}", json_kind(value)),
            )
        })?;

        let field = |name: &str| -> Result<String> {
            let value = obj
                .get(name)
                .ok_or_else(|| EtlError::record(index, format!("missing required field '{}'", name)))?;
            field_text(value).ok_or_else(|| {
                EtlError::record(
                    index,
                    format!("field '{}' must be text, found {}", name, json_kind(value)),
                )
            })
        };

        Ok(Self {
            question: field("question")?,
            answer: field("answer")?,
        })
    }

    pub fn as_row(&self) -> [&str; 2] {
        [self.question.as_str(), self.answer.as_str()]
    }
}

/// The whole input file, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub records: Vec<QaRecord>,
}

impl Document {
    pub fn new(records: Vec<QaRecord>) -> Self {
        Self { records }
    }

    /// Parse raw JSON bytes read from `source` and validate every record.
    /// Fails on the first malformed record.
    pub fn from_json_slice(source: &Path, bytes: &[u8]) -> Result<Self> {
        let root: Value = serde_json::from_slice(bytes).map_err(|e| EtlError::ParseError {
            path: source.to_path_buf(),
            source: e,
        })?;

        let items = match root {
            Value::Array(items) => items,
            other => {
                return Err(EtlError::InvalidRootError {
                    found: json_kind(&other),
                })
            }
        };

        let records = items
            .iter()
            .enumerate()
            .map(|(index, item)| QaRecord::from_value(index, item))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { records })
    }

    /// Encode the header plus one row per record. Rows end with CRLF.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());

        writer.write_record(HEADER)?;
        for record in &self.records {
            writer.write_record(record.as_row())?;
        }

        writer
            .into_inner()
            .map_err(|e| EtlError::CsvError(e.into_error().into()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub row_count: usize,
    pub csv_output: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub rows_written: usize,
}

// 純量轉成文字；null 視為空字串，陣列與物件不接受
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
