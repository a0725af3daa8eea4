//! Error handling for the CV evaluator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvEvaluatorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CvEvaluatorError>;

impl CvEvaluatorError {
    /// Wrap a decoding failure of a recognized document type as an IO error.
    pub fn corrupt_document(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        CvEvaluatorError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Failed to decode '{}': {}", path.display(), reason),
        ))
    }

    /// Whether this error must stop the process before any document is read.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(self, CvEvaluatorError::Configuration(_))
    }
}

/// Convert TOML parse errors to configuration errors
impl From<toml::de::Error> for CvEvaluatorError {
    fn from(err: toml::de::Error) -> Self {
        CvEvaluatorError::Configuration(format!("Failed to parse config: {}", err))
    }
}
