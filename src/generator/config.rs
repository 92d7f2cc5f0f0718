use log::{debug, warn};

use crate::generator::constants::{
    DEFAULT_MAX_OPERAND, DEFAULT_MAX_RESULT, DEFAULT_MIN_OPERAND, DEFAULT_MIN_RESULT,
    MAX_BOUND, MAX_GENERATION_ATTEMPTS, MIN_BOUND,
};
use crate::generator::errors::ConfigError;
use crate::problem::Operator;

/// Inclusive integer bounds with `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    min: i64,
    max: i64,
}

impl Range {
    /// Build a range, swapping the bounds if they arrive reversed
    pub fn new(min: i64, max: i64) -> Self {
        if min > max {
            debug!("Swapping reversed range bounds {}..{}", min, max);
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Bounds on individual operands and on the evaluated result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRanges {
    pub operand: Range,
    pub result: Range,
}

impl NumberRanges {
    pub fn new(min_operand: i64, max_operand: i64, min_result: i64, max_result: i64) -> Self {
        Self {
            operand: Range::new(min_operand, max_operand),
            result: Range::new(min_result, max_result),
        }
    }
}

impl Default for NumberRanges {
    fn default() -> Self {
        Self::new(
            DEFAULT_MIN_OPERAND,
            DEFAULT_MAX_OPERAND,
            DEFAULT_MIN_RESULT,
            DEFAULT_MAX_RESULT,
        )
    }
}

/// Which operations are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSet {
    pub addition: bool,
    pub subtraction: bool,
    pub multiplication: bool,
    pub division: bool,
}

impl OperationSet {
    pub fn none() -> Self {
        Self {
            addition: false,
            subtraction: false,
            multiplication: false,
            division: false,
        }
    }

    pub fn from_operators(operators: &[Operator]) -> Self {
        operators
            .iter()
            .fold(Self::none(), |set, &op| set.with(op))
    }

    pub fn with(mut self, op: Operator) -> Self {
        match op {
            Operator::Add => self.addition = true,
            Operator::Sub => self.subtraction = true,
            Operator::Mul => self.multiplication = true,
            Operator::Div => self.division = true,
        }
        self
    }

    pub fn contains(&self, op: Operator) -> bool {
        match op {
            Operator::Add => self.addition,
            Operator::Sub => self.subtraction,
            Operator::Mul => self.multiplication,
            Operator::Div => self.division,
        }
    }

    /// Enabled operators in a fixed order
    pub fn enabled(&self) -> Vec<Operator> {
        Operator::ALL
            .into_iter()
            .filter(|op| self.contains(*op))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().is_empty()
    }
}

impl Default for OperationSet {
    fn default() -> Self {
        Self::none().with(Operator::Add).with(Operator::Sub)
    }
}

/// Number of operands on the left-hand side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperandCount {
    #[default]
    Two,
    Three,
}

impl OperandCount {
    pub fn get(self) -> u8 {
        match self {
            OperandCount::Two => 2,
            OperandCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for OperandCount {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(OperandCount::Two),
            3 => Ok(OperandCount::Three),
            other => Err(ConfigError::InvalidOperandCount(other)),
        }
    }
}

/// Everything a generation call needs to know
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub ranges: NumberRanges,
    pub operations: OperationSet,
    /// Mixed mode routes through the combined operator choices
    pub mixed: bool,
    pub operand_count: OperandCount,
    /// Render three-operand problems with a trailing blank after `=`
    pub show_answer_inline: bool,
    pub max_attempts: usize,
}

impl GeneratorConfig {
    /// # Errors
    ///
    /// Returns an error if no operation is enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.operations.is_empty() {
            warn!("No operation enabled in generator configuration");
            return Err(ConfigError::NoOperationEnabled);
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            ranges: NumberRanges::default(),
            operations: OperationSet::default(),
            mixed: false,
            operand_count: OperandCount::Two,
            show_answer_inline: false,
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }
}

fn check_bound(name: &'static str, value: i64) -> Result<(), ConfigError> {
    if (MIN_BOUND..=MAX_BOUND).contains(&value) {
        Ok(())
    } else {
        warn!("{} out of range: {}", name, value);
        Err(ConfigError::BoundOutOfRange {
            name,
            value,
            min: MIN_BOUND,
            max: MAX_BOUND,
        })
    }
}

/// Check user-entered bounds before they reach the generator.
///
/// # Errors
///
/// Returns an error naming the first bound outside `1..=999`.
pub fn validate_bounds(
    min_operand: i64,
    max_operand: i64,
    min_result: i64,
    max_result: i64,
) -> Result<(), ConfigError> {
    check_bound("min operand", min_operand)?;
    check_bound("max operand", max_operand)?;
    check_bound("min result", min_result)?;
    check_bound("max result", max_result)?;
    Ok(())
}
