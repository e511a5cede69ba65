//! # Reading of linear programs
//!
//! Linear programs can be read from a small text format, or from separate strings for the
//! constraint matrix, right-hand side and cost vector. All numbers are read exactly: integers,
//! fractions like `3/8` and decimals like `1.25` (as `5/4`) are accepted.
//!
//! The text format has one `max` line holding the cost vector, and one line per constraint. Empty
//! lines and anything after a `#` are ignored:
//!
//! ```text
//! # max 2 x1 + x2
//! max 2 1
//! 8 3 <= 24
//! 1 1 <= 4
//! 1 4 <= 12
//! ```
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::algorithm::tableau::Tableau;
use crate::io::error::{ImportError, ParseError};

pub mod error;
pub mod text;

/// Import a problem from a file in the text format.
///
/// # Errors
///
/// When a file cannot be found or read, can't be parsed, or doesn't describe a valid tableau.
pub fn import(file_path: &Path) -> Result<Tableau, ImportError> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)?.read_to_string(&mut program)?;

    let problem = text::parse(&program)?;
    Ok(problem.into_tableau()?)
}

/// Build a tableau from separate strings for `A`, `b` and `c`.
///
/// Rows of `A` are separated by `;` or a newline, values by whitespace or `,`.
///
/// # Errors
///
/// When one of the strings can't be parsed, or the shapes don't agree.
pub fn from_strings(a: &str, b: &str, c: &str) -> Result<Tableau, ImportError> {
    let a = text::parse_matrix(a).map_err(|error| ParseError::with_cause("invalid matrix A", error))?;
    let b = text::parse_vector(b).map_err(|error| ParseError::with_cause("invalid vector b", error))?;
    let c = text::parse_vector(c).map_err(|error| ParseError::with_cause("invalid vector c", error))?;

    Ok(Tableau::new(&a, &b, &c)?)
}
