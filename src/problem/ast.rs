use crate::problem::constants::FALLBACK_ANSWER;

/// Arithmetic operators a practice problem can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
    ];

    /// Symbol printed on the worksheet
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "x",
            Operator::Div => "÷",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Sub => "subtraction",
            Operator::Mul => "multiplication",
            Operator::Div => "division",
        }
    }

    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }
}

/// The resolved value of a problem's blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Value(i64),
    QuotientRemainder { quotient: i64, remainder: i64 },
}

/// Which part of a two-operand problem the learner fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankPosition {
    /// `(     ) op b = result`
    FirstOperand,
    /// `a op (     ) = result`
    SecondOperand,
    /// `a op b =`, the answer is left off entirely
    Omitted,
}

impl BlankPosition {
    pub const ALL: [BlankPosition; 3] = [
        BlankPosition::FirstOperand,
        BlankPosition::SecondOperand,
        BlankPosition::Omitted,
    ];
}

/// A single generated practice problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Binary {
        a: i64,
        op: Operator,
        b: i64,
        result: Answer,
        blank: BlankPosition,
    },
    /// Three operands evaluated strictly left to right
    Chain {
        a: i64,
        op1: Operator,
        b: i64,
        op2: Operator,
        c: i64,
        result: i64,
        trailing_blank: bool,
    },
    /// Placeholder emitted when generation cannot satisfy the ranges
    Fallback,
}

impl Problem {
    /// The value that belongs in the blank, or the omitted answer
    pub fn answer(&self) -> Answer {
        match self {
            Problem::Binary {
                a, b, result, blank, ..
            } => match blank {
                BlankPosition::FirstOperand => Answer::Value(*a),
                BlankPosition::SecondOperand => Answer::Value(*b),
                BlankPosition::Omitted => *result,
            },
            Problem::Chain { result, .. } => Answer::Value(*result),
            Problem::Fallback => Answer::Value(FALLBACK_ANSWER),
        }
    }

    /// Operands in the order they are printed
    pub fn operands(&self) -> Vec<i64> {
        match self {
            Problem::Binary { a, b, .. } => vec![*a, *b],
            Problem::Chain { a, b, c, .. } => vec![*a, *b, *c],
            Problem::Fallback => vec![1, 1],
        }
    }

    pub fn operators(&self) -> Vec<Operator> {
        match self {
            Problem::Binary { op, .. } => vec![*op],
            Problem::Chain { op1, op2, .. } => vec![*op1, *op2],
            Problem::Fallback => vec![Operator::Add],
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Problem::Fallback)
    }
}
