use log::debug;

use crate::problem::ast::{Answer, Operator, Problem};
use crate::problem::constants::FALLBACK_ANSWER;
use crate::problem::errors::ProblemError;

/// Apply one operator of a chain. Division must come out even.
fn apply(lhs: i64, op: Operator, rhs: i64, step: usize) -> Result<i64, ProblemError> {
    let value = match op {
        Operator::Add => lhs.checked_add(rhs).ok_or(ProblemError::Overflow)?,
        Operator::Sub => lhs.checked_sub(rhs).ok_or(ProblemError::Overflow)?,
        Operator::Mul => lhs.checked_mul(rhs).ok_or(ProblemError::Overflow)?,
        Operator::Div => {
            if rhs == 0 {
                return Err(ProblemError::DivisionByZero);
            }
            if lhs % rhs != 0 {
                return Err(ProblemError::InexactDivision {
                    dividend: lhs,
                    divisor: rhs,
                });
            }
            lhs / rhs
        }
    };

    if value < 0 {
        debug!("Step {} of chain went negative: {}", step, value);
        return Err(ProblemError::NegativeIntermediate { step, value });
    }
    Ok(value)
}

/// Evaluate `a op1 b op2 c` strictly left to right, without operator precedence.
///
/// # Errors
///
/// Returns an error when any partial result is negative, when a division
/// leaves a remainder or divides by zero, or on overflow.
pub fn evaluate_chain(
    a: i64,
    op1: Operator,
    b: i64,
    op2: Operator,
    c: i64,
) -> Result<i64, ProblemError> {
    let first = apply(a, op1, b, 1)?;
    apply(first, op2, c, 2)
}

impl Problem {
    /// Recompute the left-hand side from the printed operands.
    ///
    /// Two-operand division yields a quotient with remainder; every other
    /// form yields a plain value.
    ///
    /// # Errors
    ///
    /// Returns an error for a negative difference, a zero divisor, a chain
    /// that breaks [`evaluate_chain`], or overflow.
    pub fn evaluate(&self) -> Result<Answer, ProblemError> {
        match self {
            Problem::Binary { a, op, b, .. } => match op {
                Operator::Div => {
                    if *b == 0 {
                        return Err(ProblemError::DivisionByZero);
                    }
                    Ok(Answer::QuotientRemainder {
                        quotient: a / b,
                        remainder: a % b,
                    })
                }
                _ => apply(*a, *op, *b, 1).map(Answer::Value),
            },
            Problem::Chain {
                a, op1, b, op2, c, ..
            } => evaluate_chain(*a, *op1, *b, *op2, *c).map(Answer::Value),
            Problem::Fallback => Ok(Answer::Value(FALLBACK_ANSWER)),
        }
    }

    /// Whether the stored result matches what the operands evaluate to
    pub fn is_consistent(&self) -> bool {
        let stored = match self {
            Problem::Binary { result, .. } => *result,
            Problem::Chain { result, .. } => Answer::Value(*result),
            Problem::Fallback => return true,
        };
        self.evaluate().is_ok_and(|value| value == stored)
    }
}
