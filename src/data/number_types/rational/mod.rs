//! # Rational numbers
//!
//! Two kinds of rational values over fixed size integers. The raw kind stores the numerator and
//! denominator as given, the simplified kind reduces them on every construction.
use std::fmt;

use crate::data::number_types::error::{ArithmeticResult, InvalidArgument};
use crate::data::number_types::integer::Integer;

pub use raw::RawRational;
pub use simplified::{gcd, simplify, SimplifiedRational};

mod macros;
mod raw;
mod simplified;

pub type Rational8 = RawRational<i8>;
pub type Rational16 = RawRational<i16>;
pub type Rational32 = RawRational<i32>;
pub type Rational64 = RawRational<i64>;
pub type Rational128 = RawRational<i128>;

pub type SimplifiedRational8 = SimplifiedRational<i8>;
pub type SimplifiedRational16 = SimplifiedRational<i16>;
pub type SimplifiedRational32 = SimplifiedRational<i32>;
pub type SimplifiedRational64 = SimplifiedRational<i64>;
pub type SimplifiedRational128 = SimplifiedRational<i128>;

/// Numerator and denominator pair with a nonzero denominator.
///
/// Storage of both kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct Ratio<T> {
    numerator: T,
    denominator: T,
}

impl<T: Integer> Ratio<T> {
    /// Store the pair unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the denominator is zero.
    pub(crate) fn new(numerator: T, denominator: T) -> ArithmeticResult<Self> {
        if denominator.is_zero() {
            return Err(InvalidArgument::ZeroDenominator.into());
        }

        Ok(Self { numerator, denominator })
    }

    pub(crate) fn numerator(&self) -> T {
        self.numerator
    }

    pub(crate) fn denominator(&self) -> T {
        debug_assert!(self.denominator.is_not_zero());

        self.denominator
    }
}

/// `numerator/denominator`, or `-numerator/denominator` when the numerator is negative.
///
/// The numerator is printed with its own sign, so a negative value starts with two minus signs.
impl<T: Integer> fmt::Display for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator < T::zero() {
            write!(f, "-{}/{}", self.numerator, self.denominator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
