//! # Storing of tableaux in memory
//!
//! Number types and the dense matrix the tableau is built on. The tableau itself lives in
//! `algorithm::tableau`.
pub mod linear_algebra;
pub mod number_types;
