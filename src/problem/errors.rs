use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division does not come out even: {dividend} / {divisor}")]
    InexactDivision { dividend: i64, divisor: i64 },
    #[error("Step {step} goes negative: {value}")]
    NegativeIntermediate { step: usize, value: i64 },
    #[error("Arithmetic overflow")]
    Overflow,
}
