//! Constrained random generation of practice problems

mod batch;
mod binary;
mod chain;
mod config;
pub mod constants;
mod engine;
mod errors;
mod random;
mod retry;

pub use batch::generate_batch_parallel;
pub use chain::operator_combinations;
pub use config::{GeneratorConfig, NumberRanges, OperandCount, OperationSet, Range, validate_bounds};
pub use engine::ProblemGenerator;
pub use errors::{ConfigError, GenerationError};
pub use random::safe_random;
pub use retry::{retry, safe_generate};

#[cfg(test)]
mod tests;
