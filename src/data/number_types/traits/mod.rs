//! # Rational arithmetic
//!
//! The operations shared by all kinds of rational values.
use num::traits::{WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use num::Zero;

use crate::data::number_types::error::{ArithmeticResult, InvalidOperation};
use crate::data::number_types::integer::Integer;

/// A rational value `numerator / denominator` of some kind.
///
/// Implementors supply `construct`, which creates a new value of their own kind. All arithmetic is
/// written in terms of it, so the result of an operation is always of the same kind as the
/// receiver.
///
/// None of the operations modify the receiver or the operand. Products and sums of the integers
/// wrap around on overflow.
pub trait Rational: Sized {
    /// Type of the numerator and denominator.
    type Integer: Integer;

    /// Construct a value of the same kind as `self`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the given denominator is zero.
    fn construct(&self, numerator: Self::Integer, denominator: Self::Integer) -> ArithmeticResult<Self>;

    fn numerator(&self) -> Self::Integer;
    /// Never zero.
    fn denominator(&self) -> Self::Integer;

    /// Negation of rational values.
    ///
    /// Definition: `negate(n / d) = -n / d`
    fn negate(&self) -> ArithmeticResult<Self> {
        self.construct(self.numerator().wrapping_neg(), self.denominator())
    }

    /// Inversion of rational values.
    ///
    /// Definition: `invert(n / d) = d / n`
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if the numerator of `self` is zero.
    fn invert(&self) -> ArithmeticResult<Self> {
        if self.numerator().is_zero() {
            return Err(InvalidOperation::InvertZero.into());
        }

        self.construct(self.denominator(), self.numerator())
    }

    /// Addition of rational values.
    ///
    /// Definition: `(n1 / d1) + (n2 / d2) = ((n1 * d2) + (n2 * d1)) / (d1 * d2)`
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if `that` is `None`.
    fn add<'a>(&self, that: impl Into<Option<&'a Self>>) -> ArithmeticResult<Self>
    where
        Self: 'a,
    {
        let that = operand(that)?;

        let numerator = self.numerator().wrapping_mul(&that.denominator())
            .wrapping_add(&that.numerator().wrapping_mul(&self.denominator()));
        let denominator = self.denominator().wrapping_mul(&that.denominator());

        self.construct(numerator, denominator)
    }

    /// Subtraction of rational values.
    ///
    /// Definition: `(n1 / d1) - (n2 / d2) = ((n1 * d2) - (n2 * d1)) / (d1 * d2)`
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if `that` is `None`.
    fn sub<'a>(&self, that: impl Into<Option<&'a Self>>) -> ArithmeticResult<Self>
    where
        Self: 'a,
    {
        let that = operand(that)?;

        let numerator = self.numerator().wrapping_mul(&that.denominator())
            .wrapping_sub(&that.numerator().wrapping_mul(&self.denominator()));
        let denominator = self.denominator().wrapping_mul(&that.denominator());

        self.construct(numerator, denominator)
    }

    /// Multiplication of rational values.
    ///
    /// Definition: `(n1 / d1) * (n2 / d2) = (n1 * n2) / (d1 * d2)`
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if `that` is `None`.
    fn mul<'a>(&self, that: impl Into<Option<&'a Self>>) -> ArithmeticResult<Self>
    where
        Self: 'a,
    {
        let that = operand(that)?;

        self.construct(
            self.numerator().wrapping_mul(&that.numerator()),
            self.denominator().wrapping_mul(&that.denominator()),
        )
    }

    /// Division of rational values.
    ///
    /// Definition: `(n1 / d1) / (n2 / d2) = (n1 * d2) / (d1 * n2)`
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if `that` is `None` or if the numerator of `that` is zero.
    fn div<'a>(&self, that: impl Into<Option<&'a Self>>) -> ArithmeticResult<Self>
    where
        Self: 'a,
    {
        let that = operand(that)?;
        if that.numerator().is_zero() {
            return Err(InvalidOperation::DivideByZero.into());
        }

        self.construct(
            self.numerator().wrapping_mul(&that.denominator()),
            self.denominator().wrapping_mul(&that.numerator()),
        )
    }
}

/// Second operand of a binary operation, which has to be present.
fn operand<'a, R: 'a>(that: impl Into<Option<&'a R>>) -> ArithmeticResult<&'a R> {
    that.into().ok_or_else(|| InvalidOperation::MissingOperand.into())
}
