//! Two-operand problems, one operator each

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::generator::config::NumberRanges;
use crate::generator::constants::{
    FALLBACK_MAX, FALLBACK_MIN, MAX_FACTOR, MAX_RETRY_FACTOR, MIN_FACTOR,
};
use crate::generator::errors::GenerationError;
use crate::generator::random::{draw, safe_random};
use crate::problem::{Answer, BlankPosition, Operator, Problem};

fn fallback_random<R: Rng>(rng: &mut R, lo: i64, hi: i64) -> i64 {
    safe_random(rng, lo, hi, FALLBACK_MIN, FALLBACK_MAX)
}

/// Pick one of the three presentations uniformly
fn with_random_blank<R: Rng>(
    rng: &mut R,
    a: i64,
    op: Operator,
    b: i64,
    result: Answer,
) -> Result<Problem, GenerationError> {
    let &blank = BlankPosition::ALL
        .choose(rng)
        .ok_or(GenerationError::NoCandidates)?;

    Ok(Problem::Binary {
        a,
        op,
        b,
        result,
        blank,
    })
}

/// Generate a two-operand problem for the given operator
pub(crate) fn generate<R: Rng>(
    op: Operator,
    ranges: &NumberRanges,
    rng: &mut R,
) -> Result<Problem, GenerationError> {
    match op {
        Operator::Add => addition(ranges, rng),
        Operator::Sub => subtraction(ranges, rng),
        Operator::Mul => multiplication(ranges, rng),
        Operator::Div => division(ranges, rng),
    }
}

/// The sum is kept under the result maximum on a best-effort basis; the
/// re-drawn branch is not checked again.
pub(crate) fn addition<R: Rng>(
    ranges: &NumberRanges,
    rng: &mut R,
) -> Result<Problem, GenerationError> {
    let (operand, result) = (ranges.operand, ranges.result);

    let mut a = fallback_random(rng, operand.min(), operand.max());
    let mut max_b = operand.max().min(result.max() - a);
    if max_b < operand.min() {
        debug!("No room for a second addend after {}, redrawing", a);
        a = fallback_random(rng, operand.min(), result.max() - operand.min());
        max_b = operand.max().min(result.max() - a);
    }
    let b = fallback_random(rng, operand.min(), max_b);

    with_random_blank(rng, a, Operator::Add, b, Answer::Value(a + b))
}

/// The minuend never exceeds the operand maximum; when the shrunk
/// difference still leaves no room, the attempt fails.
pub(crate) fn subtraction<R: Rng>(
    ranges: &NumberRanges,
    rng: &mut R,
) -> Result<Problem, GenerationError> {
    let (operand, result) = (ranges.operand, ranges.result);

    let mut difference = fallback_random(rng, result.min(), result.max());
    let mut b = fallback_random(rng, operand.min(), operand.max());
    let mut a = difference + b;

    if a > operand.max() {
        let max_b = operand.max().min(operand.max() - difference);
        if max_b >= operand.min() {
            b = fallback_random(rng, operand.min(), max_b);
        } else {
            debug!("Difference {} too large for operand range, shrinking", difference);
            difference = fallback_random(
                rng,
                result.min(),
                result.max().min(operand.max() - operand.min()),
            );
            b = fallback_random(rng, operand.min(), operand.max() - difference);
        }
        a = difference + b;
        if a > operand.max() {
            return Err(GenerationError::InfeasibleRange {
                lo: a,
                hi: operand.max(),
            });
        }
    }

    with_random_blank(rng, a, Operator::Sub, b, Answer::Value(difference))
}

/// Factors stay within the times table regardless of the operand range.
pub(crate) fn multiplication<R: Rng>(
    ranges: &NumberRanges,
    rng: &mut R,
) -> Result<Problem, GenerationError> {
    let (operand, result) = (ranges.operand, ranges.result);
    let lo = operand.min().max(MIN_FACTOR);
    let hi = operand.max().min(MAX_FACTOR);

    let mut a = draw(rng, lo, hi)?;
    let mut b = draw(rng, lo, hi)?;

    if !result.contains(a * b) {
        debug!("Product {} x {} outside result range, using smaller factors", a, b);
        a = draw(rng, MIN_FACTOR, MAX_RETRY_FACTOR.min(operand.max()))?;
        b = draw(
            rng,
            MIN_FACTOR,
            (result.max() / a).min(operand.max()).min(MAX_FACTOR),
        )?;
    }

    with_random_blank(rng, a, Operator::Mul, b, Answer::Value(a * b))
}

/// Division with remainder; the quotient is shown as `quotient...remainder`
/// even when the remainder is zero.
pub(crate) fn division<R: Rng>(
    ranges: &NumberRanges,
    rng: &mut R,
) -> Result<Problem, GenerationError> {
    let (operand, result) = (ranges.operand, ranges.result);

    let divisor = draw(rng, operand.min().max(MIN_FACTOR), operand.max().min(MAX_FACTOR))?;
    let mut quotient = draw(rng, result.min(), result.max().min(operand.max() / divisor))?;
    let mut remainder = draw(rng, 0, divisor - 1)?;
    let mut dividend = quotient * divisor + remainder;

    if dividend > operand.max() {
        debug!("Dividend {} above operand maximum, clamping", dividend);
        dividend = operand.max();
        quotient = dividend / divisor;
        remainder = dividend % divisor;
    }

    with_random_blank(
        rng,
        dividend,
        Operator::Div,
        divisor,
        Answer::QuotientRemainder {
            quotient,
            remainder,
        },
    )
}
