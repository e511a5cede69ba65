//! # Number types
//!
//! All tableau arithmetic happens in exact rational numbers, such that pivot sequences are
//! reproducible and no rounding error accumulates. This module defines the traits the algorithms
//! are written against and the conversion of user input into exact values.
pub mod traits;
pub mod rational;
