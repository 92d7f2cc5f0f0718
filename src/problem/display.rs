use std::fmt;

use crate::problem::ast::{Answer, BlankPosition, Operator, Problem};
use crate::problem::constants::{BLANK, FALLBACK_PROBLEM};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Answer::Value(n) => write!(f, "{}", n),
            Answer::QuotientRemainder {
                quotient,
                remainder,
            } => write!(f, "{}...{}", quotient, remainder),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Problem::Binary {
                a,
                op,
                b,
                result,
                blank,
            } => match blank {
                BlankPosition::FirstOperand => write!(f, "{} {} {} = {}", BLANK, op, b, result),
                BlankPosition::SecondOperand => write!(f, "{} {} {} = {}", a, op, BLANK, result),
                BlankPosition::Omitted => write!(f, "{} {} {} =", a, op, b),
            },
            Problem::Chain {
                a,
                op1,
                b,
                op2,
                c,
                trailing_blank,
                ..
            } => {
                write!(f, "{} {} {} {} {} =", a, op1, b, op2, c)?;
                if *trailing_blank {
                    write!(f, " {}", BLANK)?;
                }
                Ok(())
            }
            Problem::Fallback => write!(f, "{}", FALLBACK_PROBLEM),
        }
    }
}
