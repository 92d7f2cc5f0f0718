//! Three-operand chains, evaluated strictly left to right

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::generator::config::NumberRanges;
use crate::generator::constants::{MAX_FACTOR, MIN_FACTOR};
use crate::generator::errors::GenerationError;
use crate::generator::random::draw;
use crate::problem::{Operator, Problem, evaluate_chain};

use crate::problem::Operator::{Add, Div, Mul, Sub};

/// Operator pairs available for a chain.
///
/// With multiplication or division enabled, each enabled multiplicative
/// operator is paired with `+` and `-` on either side. Otherwise only the
/// four additive pairs are used.
pub fn operator_combinations(has_multiply: bool, has_divide: bool) -> Vec<(Operator, Operator)> {
    let mut combinations = Vec::new();

    if has_multiply || has_divide {
        for (enabled, op) in [(has_multiply, Mul), (has_divide, Div)] {
            if enabled {
                combinations.extend([(op, Add), (op, Sub), (Add, op), (Sub, op)]);
            }
        }
    } else {
        combinations.extend([(Add, Add), (Add, Sub), (Sub, Add), (Sub, Sub)]);
    }

    combinations
}

/// Generate a chain whose partial results never go negative.
///
/// # Errors
///
/// Returns an error when a constrained draw has an empty range, the
/// constructed chain fails left-to-right evaluation, or its result falls
/// outside the result range.
pub(crate) fn generate<R: Rng>(
    ranges: &NumberRanges,
    rng: &mut R,
    has_multiply: bool,
    has_divide: bool,
    trailing_blank: bool,
) -> Result<Problem, GenerationError> {
    let combinations = operator_combinations(has_multiply, has_divide);
    let &(op1, op2) = combinations
        .choose(rng)
        .ok_or(GenerationError::NoCandidates)?;

    let (a, b, c) = if op1.is_multiplicative() || op2.is_multiplicative() {
        mixed(ranges, rng, op1, op2)?
    } else {
        additive(ranges, rng, op1, op2)?
    };

    let result = evaluate_chain(a, op1, b, op2, c)?;
    if !ranges.result.contains(result) {
        return Err(GenerationError::ResultOutOfRange {
            value: result,
            min: ranges.result.min(),
            max: ranges.result.max(),
        });
    }
    debug!("Built chain {} {} {} {} {} = {}", a, op1, b, op2, c, result);

    Ok(Problem::Chain {
        a,
        op1,
        b,
        op2,
        c,
        result,
        trailing_blank,
    })
}

/// Pick the last operand so that `value op c` stays inside the result range.
fn trailing_operand<R: Rng>(
    ranges: &NumberRanges,
    rng: &mut R,
    value: i64,
    op: Operator,
) -> Result<i64, GenerationError> {
    let (operand, result) = (ranges.operand, ranges.result);
    match op {
        Add => draw(
            rng,
            operand.min().max(result.min() - value),
            operand.max().min(result.max() - value),
        ),
        Sub => draw(
            rng,
            operand.min().max(value - result.max()),
            operand.max().min(value - result.min()),
        ),
        Mul | Div => Err(GenerationError::NoCandidates),
    }
}

/// Split `value` into two operands joined by `op`, both inside the operand range.
fn split_operands<R: Rng>(
    ranges: &NumberRanges,
    rng: &mut R,
    value: i64,
    op: Operator,
) -> Result<(i64, i64), GenerationError> {
    let operand = ranges.operand;
    match op {
        Add => {
            let a = draw(
                rng,
                operand.min().max(value - operand.max()),
                operand.max().min(value - operand.min()),
            )?;
            Ok((a, value - a))
        }
        Sub => {
            let b = draw(rng, operand.min(), operand.max() - value)?;
            Ok((value + b, b))
        }
        Mul | Div => Err(GenerationError::NoCandidates),
    }
}

/// Smallest and largest intermediate an additive prefix `a op b` can produce
fn prefix_bounds(ranges: &NumberRanges, op: Operator) -> (i64, i64) {
    let operand = ranges.operand;
    match op {
        Sub => (1, operand.max() - operand.min()),
        _ => (2 * operand.min(), 2 * operand.max()),
    }
}

fn mixed<R: Rng>(
    ranges: &NumberRanges,
    rng: &mut R,
    op1: Operator,
    op2: Operator,
) -> Result<(i64, i64, i64), GenerationError> {
    let (operand, result) = (ranges.operand, ranges.result);
    let factor_lo = operand.min().max(MIN_FACTOR);
    let factor_hi = operand.max().min(MAX_FACTOR);

    if op1.is_multiplicative() {
        // a op1 b first, limited to values the additive tail can bring back into range
        let (value_lo, value_hi) = match op2 {
            Add => (result.min() - operand.max(), result.max() - operand.min()),
            _ => (result.min() + operand.min(), result.max() + operand.max()),
        };
        let (a, b, value) = if op1 == Mul {
            let a = draw(rng, factor_lo, factor_hi)?;
            let b = draw(rng, factor_lo, factor_hi.min(value_hi / a))?;
            (a, b, a * b)
        } else {
            let b = draw(rng, factor_lo, factor_hi)?;
            let quotient = draw(
                rng,
                value_lo.max(1),
                value_hi.min(operand.max() / b),
            )?;
            (b * quotient, b, quotient)
        };
        let c = trailing_operand(ranges, rng, value, op2)?;
        return Ok((a, b, c));
    }

    // (a op1 b) is the intermediate that op2 scales, so fix c and the
    // intermediate first, then split the intermediate into a and b.
    let (prefix_lo, prefix_hi) = prefix_bounds(ranges, op1);
    let c = draw(rng, factor_lo, factor_hi)?;
    let value = if op2 == Mul {
        let lo = prefix_lo.max((result.min() + c - 1) / c).max(1);
        let hi = prefix_hi.min(result.max() / c);
        draw(rng, lo, hi)?
    } else {
        let lo = result.min().max(1).max((prefix_lo + c - 1) / c);
        let hi = result.max().min(prefix_hi / c);
        draw(rng, lo, hi)? * c
    };
    let (a, b) = split_operands(ranges, rng, value, op1)?;
    Ok((a, b, c))
}

fn additive<R: Rng>(
    ranges: &NumberRanges,
    rng: &mut R,
    op1: Operator,
    op2: Operator,
) -> Result<(i64, i64, i64), GenerationError> {
    let (operand, result) = (ranges.operand, ranges.result);

    match (op1, op2) {
        (Add, Add) => {
            let a = draw(
                rng,
                operand.min().max(result.min() - 2 * operand.max()),
                operand.max().min(result.max() - 2 * operand.min()),
            )?;
            let b = draw(
                rng,
                operand.min().max(result.min() - a - operand.max()),
                operand.max().min(result.max() - a - operand.min()),
            )?;
            let c = draw(
                rng,
                operand.min().max(result.min() - a - b),
                operand.max().min(result.max() - a - b),
            )?;
            Ok((a, b, c))
        }
        (Add, Sub) => {
            // a + b > c
            let c = draw(rng, operand.min(), operand.max())?;
            let sum = draw(
                rng,
                (c + result.min()).max(2 * operand.min()),
                (result.max() + c).min(operand.max() * 2),
            )?;
            let (a, b) = split_operands(ranges, rng, sum, Add)?;
            Ok((a, b, c))
        }
        (Sub, Add) => {
            // a > b, then a - b + c within the result range
            let b = draw(rng, operand.min(), operand.max() - 1)?;
            let c = draw(rng, operand.min(), operand.max().min(result.max() - 1))?;
            let a = draw(
                rng,
                operand.min().max(b + 1).max(b + result.min() - c),
                operand.max().min(b + result.max() - c),
            )?;
            Ok((a, b, c))
        }
        (Sub, Sub) => {
            // a > b + c
            let b = draw(rng, operand.min(), operand.max())?;
            let c = draw(rng, operand.min(), operand.max())?;
            let min_a = b + c + result.min();
            if min_a <= operand.max() {
                let a = draw(rng, min_a, operand.max().min(b + c + result.max()))?;
                return Ok((a, b, c));
            }

            debug!("a - {} - {} needs a >= {}, shrinking subtrahends", b, c, min_a);
            let total = draw(rng, operand.min(), operand.max() - result.min())?;
            let b = draw(rng, operand.min(), total)?;
            let c = total - b;
            let a = total
                + draw(
                    rng,
                    result.min(),
                    result.max().min(operand.max() - total),
                )?;
            Ok((a, b, c))
        }
        _ => Err(GenerationError::NoCandidates),
    }
}
