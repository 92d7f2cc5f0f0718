use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::generator::config::{GeneratorConfig, NumberRanges, OperandCount};
use crate::generator::constants::MAX_BATCH_SIZE;
use crate::generator::errors::{ConfigError, GenerationError};
use crate::generator::retry::safe_generate;
use crate::generator::{binary, chain};
use crate::problem::{Operator, Problem};

/// Generates practice problems from a configuration it owns.
///
/// Range updates and generation both take `&mut self`, so a generator
/// shared between threads has to sit behind a lock.
pub struct ProblemGenerator<R: Rng = StdRng> {
    config: GeneratorConfig,
    rng: R,
}

impl ProblemGenerator<StdRng> {
    /// Create a generator seeded from the operating system
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a reproducible generator
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl Default for ProblemGenerator<StdRng> {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn ranges(&self) -> &NumberRanges {
        &self.config.ranges
    }

    /// Replace both ranges, swapping any reversed pair
    pub fn update_ranges(
        &mut self,
        min_operand: i64,
        max_operand: i64,
        min_result: i64,
        max_result: i64,
    ) {
        self.config.ranges = NumberRanges::new(min_operand, max_operand, min_result, max_result);
        info!(
            "Ranges updated: operand {}..={}, result {}..={}",
            self.config.ranges.operand.min(),
            self.config.ranges.operand.max(),
            self.config.ranges.result.min(),
            self.config.ranges.result.max()
        );
    }

    /// Generate one problem, degrading to [`Problem::Fallback`] when the
    /// configuration is invalid or the ranges cannot be satisfied.
    pub fn generate(&mut self) -> Problem {
        if let Err(err) = self.config.validate() {
            warn!("{}, using fallback problem", err);
            return Problem::Fallback;
        }
        let max_attempts = self.config.max_attempts;
        safe_generate(|| self.try_generate(), max_attempts)
    }

    /// Generate `count` independent problems.
    ///
    /// # Errors
    ///
    /// Returns an error if no operation is enabled or `count` exceeds the
    /// batch limit.
    pub fn generate_batch(&mut self, count: usize) -> Result<Vec<Problem>, ConfigError> {
        check_batch_size(count)?;
        self.config.validate()?;
        info!("Generating {} problems", count);
        Ok((0..count).map(|_| self.generate()).collect())
    }

    /// One attempt at a problem for the current configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the constrained draws cannot be satisfied.
    pub fn try_generate(&mut self) -> Result<Problem, GenerationError> {
        let GeneratorConfig {
            ranges,
            operations,
            mixed,
            operand_count,
            show_answer_inline,
            ..
        } = self.config;
        let rng = &mut self.rng;

        if mixed {
            return match operand_count {
                OperandCount::Two => {
                    let mut candidates = Vec::with_capacity(4);
                    if operations.division {
                        candidates.push(Operator::Div);
                    }
                    if operations.multiplication {
                        candidates.push(Operator::Mul);
                    }
                    candidates.extend([Operator::Add, Operator::Sub]);
                    let op = pick(&candidates, rng)?;
                    binary::generate(op, &ranges, rng)
                }
                OperandCount::Three => chain::generate(
                    &ranges,
                    rng,
                    operations.multiplication,
                    operations.division,
                    show_answer_inline,
                ),
            };
        }

        let op = pick(&operations.enabled(), rng)?;
        match operand_count {
            OperandCount::Two => binary::generate(op, &ranges, rng),
            OperandCount::Three => chain::generate(
                &ranges,
                rng,
                op == Operator::Mul,
                op == Operator::Div,
                show_answer_inline,
            ),
        }
    }
}

fn pick<R: Rng>(candidates: &[Operator], rng: &mut R) -> Result<Operator, GenerationError> {
    candidates
        .choose(rng)
        .copied()
        .ok_or(GenerationError::NoCandidates)
}

pub(crate) fn check_batch_size(count: usize) -> Result<(), ConfigError> {
    if count > MAX_BATCH_SIZE {
        warn!("Rejecting batch of {} problems", count);
        return Err(ConfigError::BatchTooLarge {
            requested: count,
            limit: MAX_BATCH_SIZE,
        });
    }
    Ok(())
}
