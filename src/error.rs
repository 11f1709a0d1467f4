//! Error types for pipeline stage invocations

use thiserror::Error;

use crate::storage::error::StorageError;

/// Result type for stage invocations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Failure of a single stage invocation.
///
/// Every stage fails fast on the first error and writes no output artifact
/// for that invocation, so a caller never observes a partial result under a
/// key it was told about.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Stage parameters are missing or malformed; the caller must fix the request
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The object store could not serve a read or write; retrying is safe
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// A referenced artifact key is absent from the store
    #[error("not found: {0}")]
    NotFound(String),

    /// An artifact could not be parsed as a word-count table
    #[error("failed to decode artifact {key}: {message}")]
    Decode { key: String, message: String },

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// Create an invalid-input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a decode error for the artifact stored under `key`
    pub fn decode<E: std::fmt::Display>(key: &str, err: E) -> Self {
        Self::Decode {
            key: key.to_string(),
            message: err.to_string(),
        }
    }

    /// Check if re-invoking the stage with the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<StorageError> for PipelineError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(key) => Self::NotFound(key),
            other => Self::StoreUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_not_found_maps_to_pipeline_not_found() {
        let err: PipelineError = StorageError::not_found("results/missing.json").into();
        assert!(matches!(err, PipelineError::NotFound(ref key) if key == "results/missing.json"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn storage_io_maps_to_store_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err: PipelineError = StorageError::Io(io).into();
        assert!(matches!(err, PipelineError::StoreUnavailable(_)));
        assert!(err.is_retryable());
    }
}
