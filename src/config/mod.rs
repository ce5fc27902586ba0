#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use std::path::{Path, PathBuf};

/// Source file, relative to the working directory.
pub const INPUT_PATH: &str = "questions_and_answers.json";

/// Destination file, relative to the working directory.
pub const OUTPUT_PATH: &str = "data.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConverterConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(INPUT_PATH, OUTPUT_PATH)
    }
}

impl ConfigProvider for ConverterConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Validate for ConverterConfig {
    fn validate(&self) -> Result<()> {
        validate_paths(self)
    }
}

pub(crate) fn validate_paths<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_path("input_path", config.input_path())?;
    validate_path("output_path", config.output_path())?;
    validate_distinct_paths("output_path", config.input_path(), config.output_path())
}
