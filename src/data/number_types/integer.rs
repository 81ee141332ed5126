//! # Integers
//!
//! The fixed size signed integers that numerators and denominators are stored in.
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num::traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};

use crate::data::number_types::nonzero::Nonzero;

/// A fixed size, signed machine integer.
///
/// Arithmetic on rational values uses the wrapping operations, overflow is neither detected nor
/// reported.
pub trait Integer:
    PrimInt +
    Signed +

    WrappingAdd +
    WrappingSub +
    WrappingMul +
    WrappingNeg +

    Nonzero +
    Hash +
    Display +
    Debug +
{
}

impl<T> Integer for T
where
    T:
        PrimInt +
        Signed +
        WrappingAdd +
        WrappingSub +
        WrappingMul +
        WrappingNeg +
        Nonzero +
        Hash +
        Display +
        Debug +
    ,
{
}
