use crate::config::{validate_paths, INPUT_PATH, OUTPUT_PATH};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::Path;

/// Converts `questions_and_answers.json` into `data.csv` in the current directory.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "qa2csv")]
#[command(about = "Convert a JSON list of question/answer records into a two-column CSV")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        Path::new(INPUT_PATH)
    }

    fn output_path(&self) -> &Path {
        Path::new(OUTPUT_PATH)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_paths(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verbose_flag() {
        let config = CliConfig::try_parse_from(["qa2csv", "--verbose"]).unwrap();
        assert!(config.verbose);

        let config = CliConfig::try_parse_from(["qa2csv"]).unwrap();
        assert!(!config.verbose);
    }

    #[test]
    fn test_paths_are_not_arguments() {
        assert!(CliConfig::try_parse_from(["qa2csv", "--output-path", "x.csv"]).is_err());
        assert!(CliConfig::try_parse_from(["qa2csv", "input.json"]).is_err());
    }

    #[test]
    fn test_fixed_paths() {
        let config = CliConfig::default();
        assert_eq!(config.input_path(), Path::new("questions_and_answers.json"));
        assert_eq!(config.output_path(), Path::new("data.csv"));
        assert!(config.validate().is_ok());
    }
}
