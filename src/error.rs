//! Error types for fitting, prediction and persistence.

use thiserror::Error;

/// Everything that can go wrong when building, fitting or using an elastic net.
///
/// Divergence is not an error: an oversized learning rate shows up as non-finite
/// weights and costs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElasticNetError {
    /// Input shapes are inconsistent (row counts differ, wrong rank, feature count mismatch).
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// A hyperparameter is outside its valid range.
    #[error("invalid hyperparameter `{name}`: {reason}")]
    InvalidHyperparameter { name: &'static str, reason: String },

    /// The training set has no samples.
    #[error("dataset is empty")]
    EmptyDataset,

    /// A training run finished without recording a single iterate to select from.
    #[error("training recorded no iterates")]
    EmptyHistory,

    /// Encoding or decoding a persisted model failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading or writing a model file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ElasticNetError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ElasticNetError::InvalidHyperparameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn shape(expected: impl Into<String>, got: impl Into<String>) -> Self {
        ElasticNetError::ShapeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }
}

impl From<std::io::Error> for ElasticNetError {
    fn from(err: std::io::Error) -> Self {
        ElasticNetError::Io(err.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<bincode::Error> for ElasticNetError {
    fn from(err: bincode::Error) -> Self {
        ElasticNetError::Serialization(err.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ElasticNetError>;
