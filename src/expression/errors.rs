use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("{lhs} is not divisible by {rhs}")]
    InexactDivision { lhs: u64, rhs: u64 },
    #[error("Difference {lhs} - {rhs} is not positive")]
    NonPositiveDifference { lhs: u64, rhs: u64 },
    #[error("Arithmetic overflow")]
    Overflow,
}
