//! # Simplified rational values
//!
//! Values are reduced by their greatest common divisor every time they are constructed.
//!
//! The greatest common divisor is found by a bounded scan rather than by Euclid's algorithm. It is
//! only defined for `a > 0` and `b >= 0`, and it never tests `min(a, b)` itself as a divisor. Pairs
//! outside of that domain (a zero or negative numerator, a negative denominator) are kept as they
//! are.
use std::convert::TryFrom;
use std::fmt;

use log::trace;

use crate::data::number_types::error::{ArithmeticResult, Error, InvalidArgument, InvalidOperation};
use crate::data::number_types::integer::Integer;
use crate::data::number_types::rational::{Ratio, RawRational};
use crate::data::number_types::traits::Rational;

/// A rational value that is simplified on construction.
///
/// Equality compares the stored, already reduced, numerator and denominator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SimplifiedRational<T> {
    ratio: Ratio<T>,
}

impl<T: Integer> SimplifiedRational<T> {
    /// Create a new value from `numerator / denominator`, simplified.
    ///
    /// A pair without a common divisor below `min(numerator, denominator)`, such as `1/2`, is
    /// stored as given.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the denominator is zero.
    pub fn new(numerator: T, denominator: T) -> ArithmeticResult<Self> {
        if denominator.is_zero() {
            return Err(InvalidArgument::ZeroDenominator.into());
        }

        let (numerator, denominator) = match simplify(numerator, denominator) {
            Ok(pair) => pair,
            Err(Error::DivisionByZero) => {
                trace!("Keeping {}/{} as given", numerator, denominator);
                (numerator, denominator)
            },
            Err(error) => return Err(error),
        };
        Ratio::new(numerator, denominator).map(|ratio| Self { ratio })
    }

    /// Numerator and denominator, in that order.
    pub fn into_parts(self) -> (T, T) {
        (self.ratio.numerator(), self.ratio.denominator())
    }
}

/// Greatest common divisor of `a` and `b`, found by trying every `i` with `0 < i < min(a, b)`.
///
/// Returns zero when no such `i` divides both values, e.g. when `min(a, b)` is 1.
///
/// # Errors
///
/// `InvalidOperation` if `a <= 0` or `b < 0`.
pub fn gcd<T: Integer>(a: T, b: T) -> ArithmeticResult<T> {
    if a <= T::zero() || b < T::zero() {
        return Err(InvalidOperation::GcdDomain.into());
    }

    let mut gcd = T::zero();
    let mut i = T::one();
    while i < a && i < b {
        if (a % i).is_zero() && (b % i).is_zero() {
            gcd = i;
        }
        i = i + T::one();
    }

    if gcd.is_zero() {
        trace!("No common divisor below min({}, {})", a, b);
    }

    Ok(gcd)
}

/// Divide the numerator and denominator by their greatest common divisor.
///
/// When the greatest common divisor isn't defined for the pair, the pair is returned unchanged.
/// For example, `simplify(10, 100) = (2, 20)` and `simplify(0, 10) = (0, 10)`.
///
/// # Errors
///
/// `InvalidOperation` if the denominator is zero, `DivisionByZero` if the greatest common divisor
/// is zero.
pub fn simplify<T: Integer>(numerator: T, denominator: T) -> ArithmeticResult<(T, T)> {
    if denominator.is_zero() {
        return Err(InvalidOperation::SimplifyZeroDenominator.into());
    }

    let gcd = match gcd(numerator, denominator) {
        Ok(gcd) => gcd,
        Err(Error::InvalidOperation(InvalidOperation::GcdDomain)) => {
            trace!("Not simplifying {}/{}", numerator, denominator);
            return Ok((numerator, denominator));
        },
        Err(error) => return Err(error),
    };

    if gcd.is_zero() {
        return Err(Error::DivisionByZero);
    }

    Ok((numerator / gcd, denominator / gcd))
}

impl<T: Integer> Rational for SimplifiedRational<T> {
    type Integer = T;

    /// Unlike `new`, a greatest common divisor of zero is an error here.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the denominator is zero, `DivisionByZero` if simplification finds a
    /// greatest common divisor of zero.
    fn construct(&self, numerator: T, denominator: T) -> ArithmeticResult<Self> {
        if denominator.is_zero() {
            return Err(InvalidArgument::ZeroDenominator.into());
        }

        let (numerator, denominator) = simplify(numerator, denominator)?;
        Ratio::new(numerator, denominator).map(|ratio| Self { ratio })
    }

    fn numerator(&self) -> T {
        self.ratio.numerator()
    }

    fn denominator(&self) -> T {
        self.ratio.denominator()
    }
}

impl<T: Integer> TryFrom<(T, T)> for SimplifiedRational<T> {
    type Error = Error;

    fn try_from((numerator, denominator): (T, T)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

/// Values of different kinds are never equal.
impl<T> PartialEq<RawRational<T>> for SimplifiedRational<T> {
    fn eq(&self, _other: &RawRational<T>) -> bool {
        false
    }
}

impl<T: Integer> fmt::Display for SimplifiedRational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ratio, f)
    }
}

#[cfg(test)]
mod test {
    use std::convert::TryFrom;

    use itertools::iproduct;

    use crate::{SR32, Rational};
    use crate::data::number_types::error::{Error, InvalidArgument, InvalidOperation};
    use crate::data::number_types::rational::{gcd, simplify, SimplifiedRational, SimplifiedRational32, SimplifiedRational64};

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), Ok(6));
        assert_eq!(gcd(10, 100), Ok(5));
        assert_eq!(gcd(100, 10), Ok(5));
        assert_eq!(gcd(3, 4), Ok(1));
        assert_eq!(gcd(9, 10), Ok(1));
        assert_eq!(gcd(35_i64, 49), Ok(7));
    }

    #[test]
    fn test_gcd_does_not_test_minimum() {
        // 4 divides 8, but only divisors below 4 are tried
        assert_eq!(gcd(4, 8), Ok(2));
        assert_eq!(gcd(6, 6), Ok(3));
        assert_eq!(gcd(3, 9), Ok(1));
        assert_eq!(gcd(2, 2), Ok(1));
        assert_eq!(gcd(1, 5), Ok(0));
        assert_eq!(gcd(5, 1), Ok(0));
        assert_eq!(gcd(5, 0), Ok(0));
    }

    #[test]
    fn test_gcd_domain() {
        assert_eq!(gcd(0, 10), Err(Error::InvalidOperation(InvalidOperation::GcdDomain)));
        assert_eq!(gcd(-3, 9), Err(Error::InvalidOperation(InvalidOperation::GcdDomain)));
        assert_eq!(gcd(3, -9), Err(Error::InvalidOperation(InvalidOperation::GcdDomain)));
    }

    #[test]
    fn test_gcd_is_largest_proper_common_divisor() {
        for (a, b) in iproduct!(1..40_i32, 0..40_i32) {
            let expected = (1..a.min(b))
                .filter(|i| a % i == 0 && b % i == 0)
                .max()
                .unwrap_or(0);
            assert_eq!(gcd(a, b), Ok(expected), "gcd({}, {})", a, b);
        }
    }

    #[test]
    fn test_simplify() {
        assert_eq!(simplify(10, 100), Ok((2, 20)));
        assert_eq!(simplify(12, 18), Ok((2, 3)));
        assert_eq!(simplify(3, 4), Ok((3, 4)));
    }

    #[test]
    fn test_simplify_outside_gcd_domain() {
        assert_eq!(simplify(0, 10), Ok((0, 10)));
        assert_eq!(simplify(-10, 100), Ok((-10, 100)));
        assert_eq!(simplify(10, -100), Ok((10, -100)));
    }

    #[test]
    fn test_simplify_errors() {
        assert_eq!(simplify(3, 0), Err(Error::InvalidOperation(InvalidOperation::SimplifyZeroDenominator)));
        assert_eq!(simplify(1, 10), Err(Error::DivisionByZero));
        assert_eq!(simplify(7, 1), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_new() {
        assert_eq!(SimplifiedRational32::new(10, 100).map(SimplifiedRational::into_parts), Ok((2, 20)));
        assert_eq!(SimplifiedRational32::new(0, 10).map(SimplifiedRational::into_parts), Ok((0, 10)));
        assert_eq!(SimplifiedRational32::new(-4, 8).map(SimplifiedRational::into_parts), Ok((-4, 8)));
        assert_eq!(SimplifiedRational64::new(21, 35).map(SimplifiedRational::into_parts), Ok((3, 5)));
    }

    #[test]
    fn test_new_errors() {
        assert_eq!(SimplifiedRational32::new(4, 0), Err(Error::InvalidArgument(InvalidArgument::ZeroDenominator)));
        assert_eq!(SimplifiedRational32::new(0, 0), Err(Error::InvalidArgument(InvalidArgument::ZeroDenominator)));
    }

    #[test]
    fn test_new_without_common_divisor() {
        assert_eq!(SimplifiedRational32::new(1, 2).map(SimplifiedRational::into_parts), Ok((1, 2)));
        assert_eq!(SimplifiedRational32::new(2, 1).map(SimplifiedRational::into_parts), Ok((2, 1)));
        assert_eq!(SimplifiedRational32::new(5, 1).map(SimplifiedRational::into_parts), Ok((5, 1)));
        assert_eq!(SimplifiedRational32::new(1, 1).map(SimplifiedRational::into_parts), Ok((1, 1)));
    }

    #[test]
    fn test_construct_without_common_divisor() {
        let value = SR32!(3, 4);
        assert_eq!(value.construct(1, 2), Err(Error::DivisionByZero));
        assert_eq!(value.construct(5, 1), Err(Error::DivisionByZero));
        assert_eq!(SR32!(1, 2).negate(), Ok(SR32!(-1, 2)));
        assert_eq!(SR32!(-1, 2).negate(), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_construct() {
        let value = SR32!(3, 4);
        assert_eq!(value.construct(12, 18), Ok(SR32!(2, 3)));
        assert_eq!(value.construct(12, 0), Err(Error::InvalidArgument(InvalidArgument::ZeroDenominator)));
    }

    #[test]
    fn test_eq() {
        assert_eq!(SR32!(12, 18), SR32!(2, 3));
        assert_eq!(SR32!(12, 18), SR32!(24, 36));
        assert_ne!(SR32!(-2, 3), SR32!(2, -3));
    }

    #[test]
    fn test_try_from() {
        assert_eq!(SimplifiedRational::try_from((12_i32, 18)), Ok(SR32!(2, 3)));
        assert!(SimplifiedRational::try_from((12_i32, 0)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SR32!(12, 18).to_string(), "2/3");
        assert_eq!(SR32!(0, 10).to_string(), "0/10");
        assert_eq!(SR32!(-3, 4).to_string(), "--3/4");
    }
}
