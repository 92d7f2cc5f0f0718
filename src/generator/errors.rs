use thiserror::Error;

use crate::problem::ProblemError;

/// Reasons a single generation attempt fails
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Empty range for random draw: [{lo}, {hi}]")]
    InfeasibleRange { lo: i64, hi: i64 },
    #[error("No operator candidates available")]
    NoCandidates,
    #[error("Result {value} outside [{min}, {max}]")]
    ResultOutOfRange { value: i64, min: i64, max: i64 },
    #[error("Generated problem is invalid: {0}")]
    InvalidProblem(#[from] ProblemError),
    #[error("No valid problem after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },
}

/// Configuration rejected before generation starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("At least one operation must be enabled")]
    NoOperationEnabled,
    #[error("Operand count must be 2 or 3, got {0}")]
    InvalidOperandCount(u8),
    #[error("{name} must be between {min} and {max}, got {value}")]
    BoundOutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("Batch of {requested} problems exceeds the limit of {limit}")]
    BatchTooLarge { requested: usize, limit: usize },
}
