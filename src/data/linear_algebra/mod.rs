//! # Linear algebra primitives
//!
//! Dense storage for the tableau matrix and the elementary row operations performed on it.
pub mod matrix;
