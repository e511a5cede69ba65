//! # Simplex tableaux
//!
//! An illustration of the simplex method for linear programs of the form
//!
//! ```text
//! max c^T x  s.t.  Ax <= b, x >= 0
//! ```
//!
//! with `b >= 0`, such that the slack variables form an initial basis. Tableaux are stored with
//! exact rational values, so every pivot is computed without rounding and results are
//! reproducible. Pivots can be inspected one at a time, applied to a copy or in place, undone, or
//! chained to solve the program.
//!
//! ```
//! use simplex_tableaux::algorithm::PivotSelection;
//! use simplex_tableaux::algorithm::tableau::Tableau;
//! use simplex_tableaux::RB;
//!
//! let tableau = Tableau::new(&[[8, 3], [1, 1], [1, 4]], &[24, 4, 12], &[2, 1]).unwrap();
//! assert_eq!(tableau.find_pivot(), PivotSelection::Pivot { row: 0, column: 0 });
//!
//! let solution = tableau.pivot_solve(false).unwrap();
//! assert_eq!(solution.values, vec![RB!(12, 5), RB!(8, 5)]);
//! assert_eq!(solution.objective_value, RB!(32, 5));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
