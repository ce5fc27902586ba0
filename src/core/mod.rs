pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{Document, QaRecord, RunSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
