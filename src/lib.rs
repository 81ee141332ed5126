//! # Rational kinds
//!
//! Exact rational arithmetic over fixed size signed integers, in two kinds:
//!
//! * [`RawRational`](data::number_types::rational::RawRational) keeps the numerator and
//!   denominator exactly as they were given.
//! * [`SimplifiedRational`](data::number_types::rational::SimplifiedRational) reduces every value
//!   it constructs.
//!
//! The arithmetic is written once, in the [`Rational`](data::number_types::traits::Rational)
//! trait, and produces values of the same kind as the receiver.
pub mod data;

pub use data::number_types::error::{ArithmeticResult, Error, InvalidArgument, InvalidOperation};
pub use data::number_types::rational::{gcd, simplify, RawRational, SimplifiedRational};
pub use data::number_types::rational::{Rational8, Rational16, Rational32, Rational64, Rational128};
pub use data::number_types::rational::{
    SimplifiedRational8, SimplifiedRational16, SimplifiedRational32, SimplifiedRational64,
    SimplifiedRational128,
};
pub use data::number_types::traits::Rational;
