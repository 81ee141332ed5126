//! # Errors
//!
//! Failures of constructing rational values and of operating on them.
use thiserror::Error;

/// Shorthand for the result of a fallible rational operation.
pub type ArithmeticResult<T> = Result<T, Error>;

/// Everything that can go wrong when constructing or combining rational values.
///
/// Errors are returned to the caller immediately. The only place where one is recovered from is
/// simplification, which falls back to the unreduced pair when the greatest common divisor is not
/// defined for its inputs.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// A value was given that can't be used to construct a rational value.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    /// The operation is not defined for the values it was applied to.
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperation),
    /// Simplification found a greatest common divisor of zero and can't divide by it.
    #[error("division by zero while simplifying")]
    DivisionByZero,
}

/// Reason for an [`Error::InvalidArgument`].
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum InvalidArgument {
    #[error("denominator can't be zero")]
    ZeroDenominator,
}

/// Reason for an [`Error::InvalidOperation`].
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum InvalidOperation {
    /// Inverting a value with numerator zero.
    #[error("can't invert a value with numerator zero")]
    InvertZero,
    /// A binary operation was given no second operand.
    #[error("second operand is missing")]
    MissingOperand,
    /// Dividing by a value with numerator zero.
    #[error("can't divide by a value with numerator zero")]
    DivideByZero,
    /// The greatest common divisor is only defined for `a > 0` and `b >= 0`.
    #[error("greatest common divisor requires a > 0 and b >= 0")]
    GcdDomain,
    /// Simplifying a pair with denominator zero.
    #[error("can't simplify a pair with denominator zero")]
    SimplifyZeroDenominator,
}
