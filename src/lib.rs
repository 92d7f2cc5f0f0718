//! Mathsheet - A library for generating arithmetic practice problems
//!
//! This library produces randomized addition, subtraction, multiplication,
//! division and three-operand chain problems whose operands and results stay
//! inside configurable ranges, and lays them out as printable worksheets.

pub mod generator;
pub mod problem;
pub mod sheet;

// Re-export the main public API
pub use generator::{
    ConfigError, GenerationError, GeneratorConfig, NumberRanges, OperandCount, OperationSet,
    ProblemGenerator, Range, generate_batch_parallel, safe_generate, validate_bounds,
};
pub use problem::{Answer, BlankPosition, Operator, Problem, ProblemError};
pub use sheet::{SheetError, SheetLayout};

/// Generate a single formatted problem for the given configuration
///
/// This is a convenience function that creates an OS-seeded generator for one
/// call. Configurations that cannot be satisfied yield the placeholder
/// `1 + 1 =`.
///
/// # Examples
///
/// ```
/// use mathsheet::{GeneratorConfig, NumberRanges, Operator, OperationSet, generate};
///
/// let config = GeneratorConfig {
///     ranges: NumberRanges::new(1, 20, 1, 20),
///     operations: OperationSet::from_operators(&[Operator::Add]),
///     ..GeneratorConfig::default()
/// };
/// let problem = generate(&config);
/// assert!(problem.contains(" + "));
/// ```
pub fn generate(config: &GeneratorConfig) -> String {
    ProblemGenerator::new(*config).generate().to_string()
}

/// Generate `count` formatted problems
///
/// # Errors
///
/// This function will return an error if:
/// * No operation is enabled in `config`
/// * `count` is larger than the batch limit of 10,000
pub fn generate_batch(config: &GeneratorConfig, count: usize) -> Result<Vec<String>, ConfigError> {
    let problems = ProblemGenerator::new(*config).generate_batch(count)?;
    Ok(problems.iter().map(ToString::to_string).collect())
}
