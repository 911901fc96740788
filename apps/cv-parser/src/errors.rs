use std::path::PathBuf;

use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Every variant is fatal: `main` prints it and exits with status 1.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Failed to write '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to console: {0}")]
    Console(#[from] std::io::Error),

    #[error("Configuration error: {0:#}")]
    Config(#[from] anyhow::Error),
}
