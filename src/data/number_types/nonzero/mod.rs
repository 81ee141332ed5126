//! # Nonzero values
//!
//! The denominator of every rational value is nonzero. That is checked once, at construction, and
//! afterwards only restated in debug asserts through this trait.
use num::Zero;

/// Implementors should not be zero.
///
/// The `num::Zero` trait is for types that can be zero, this trait is for values that are expected
/// to be something other than zero. The types may or may not be able to represent zero.
pub trait Nonzero {
    /// Whether the value is not equal to zero.
    ///
    /// Should always be `true` where it is asserted.
    fn is_not_zero(&self) -> bool;
}

macro_rules! could_be_zero {
    ($t: ident) => {
        impl Nonzero for $t {
            fn is_not_zero(&self) -> bool {
                !Zero::is_zero(self)
            }
        }
    }
}

could_be_zero!(i8);
could_be_zero!(i16);
could_be_zero!(i32);
could_be_zero!(i64);
could_be_zero!(i128);
