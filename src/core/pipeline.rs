use crate::core::{ConfigProvider, Document, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;
use std::path::PathBuf;

/// JSON question/answer list in, two-column CSV out.
pub struct QaCsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> QaCsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for QaCsvPipeline<S, C> {
    fn extract(&self) -> Result<Document> {
        let input_path = self.config.input_path();
        let bytes = self.storage.read_file(input_path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), input_path.display());

        Document::from_json_slice(input_path, &bytes)
    }

    fn transform(&self, document: Document) -> Result<TransformResult> {
        let csv_output = document.to_csv()?;
        tracing::debug!(
            "Encoded {} rows into {} bytes of CSV",
            document.len(),
            csv_output.len()
        );

        Ok(TransformResult {
            row_count: document.len(),
            csv_output,
        })
    }

    fn load(&self, result: TransformResult) -> Result<PathBuf> {
        let output_path = self.config.output_path();
        self.storage.write_file(output_path, &result.csv_output)?;
        Ok(output_path.to_path_buf())
    }
}
