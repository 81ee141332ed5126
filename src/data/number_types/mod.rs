//! # Number types
//!
//! Fixed size integers, the nonzero invariant and the two kinds of rational numbers built on them.
pub mod error;
pub mod integer;
pub mod nonzero;
pub mod rational;
pub mod traits;
