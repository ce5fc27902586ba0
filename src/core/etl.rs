use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once. The first failing stage aborts
    /// the run; nothing is written unless extract and transform both succeed.
    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting conversion");

        // Extract
        let document = self.pipeline.extract()?;
        tracing::info!("Loaded {} records", document.len());

        // Transform
        let transformed = self.pipeline.transform(document)?;
        let rows_written = transformed.row_count;
        tracing::info!("Encoded {} rows", rows_written);

        // Load
        let output_path = self.pipeline.load(transformed)?;
        tracing::info!("Output saved to: {}", output_path.display());

        Ok(RunSummary {
            output_path,
            rows_written,
        })
    }
}
