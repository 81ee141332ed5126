//! # Data
pub mod number_types;
