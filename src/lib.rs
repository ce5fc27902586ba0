pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::{ConverterConfig, INPUT_PATH, OUTPUT_PATH};
pub use core::{etl::EtlEngine, pipeline::QaCsvPipeline, Document, QaRecord, RunSummary};
pub use utils::error::{EtlError, Result};

use std::path::Path;

/// Convert the JSON file at `input` into a CSV file at `output`.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<RunSummary> {
    let config = ConverterConfig::new(input.as_ref(), output.as_ref());
    utils::validation::Validate::validate(&config)?;

    let pipeline = QaCsvPipeline::new(LocalStorage::new("."), config);
    EtlEngine::new(pipeline).run()
}
