use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if display.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.into_owned(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.into_owned(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸入與輸出不能是同一個檔案，否則寫入會覆蓋來源
pub fn validate_distinct_paths(field_name: &str, input: &Path, output: &Path) -> Result<()> {
    if input == output {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: output.display().to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_path", Path::new("questions_and_answers.json")).is_ok());
        assert!(validate_path("input_path", Path::new("")).is_err());
        assert!(validate_path("input_path", Path::new("  ")).is_err());
        assert!(validate_path("output_path", Path::new("bad\0name.csv")).is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("output_path", Path::new("a.json"), Path::new("a.csv")).is_ok());
        assert!(validate_distinct_paths("output_path", Path::new("a.json"), Path::new("a.json")).is_err());
    }
}
