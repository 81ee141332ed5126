//! # Raw rational values
//!
//! Values are stored exactly as they are constructed, no common factors are ever removed.
use std::convert::TryFrom;
use std::fmt;

use crate::data::number_types::error::{ArithmeticResult, Error};
use crate::data::number_types::integer::Integer;
use crate::data::number_types::rational::{Ratio, SimplifiedRational};
use crate::data::number_types::traits::Rational;

/// A rational value that keeps its numerator and denominator as given.
///
/// Two raw values are equal only if both the numerator and the denominator are identical, so
/// `1/2` and `2/4` are different values.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RawRational<T> {
    ratio: Ratio<T>,
}

impl<T: Integer> RawRational<T> {
    /// Create a new value `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the denominator is zero.
    pub fn new(numerator: T, denominator: T) -> ArithmeticResult<Self> {
        Ratio::new(numerator, denominator).map(|ratio| Self { ratio })
    }

    /// Numerator and denominator, in that order.
    pub fn into_parts(self) -> (T, T) {
        (self.ratio.numerator(), self.ratio.denominator())
    }
}

impl<T: Integer> Rational for RawRational<T> {
    type Integer = T;

    fn construct(&self, numerator: T, denominator: T) -> ArithmeticResult<Self> {
        Self::new(numerator, denominator)
    }

    fn numerator(&self) -> T {
        self.ratio.numerator()
    }

    fn denominator(&self) -> T {
        self.ratio.denominator()
    }
}

impl<T: Integer> TryFrom<(T, T)> for RawRational<T> {
    type Error = Error;

    fn try_from((numerator, denominator): (T, T)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

/// Values of different kinds are never equal.
impl<T> PartialEq<SimplifiedRational<T>> for RawRational<T> {
    fn eq(&self, _other: &SimplifiedRational<T>) -> bool {
        false
    }
}

impl<T: Integer> fmt::Display for RawRational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ratio, f)
    }
}
