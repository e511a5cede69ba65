//! # Algorithms
//!
//! The tableau, the rules for moving from basis to basis, and the simplex iteration built on them.
pub mod error;
pub mod solve;
pub mod strategy;
pub mod tableau;

/// Where the simplex method goes next from the current tableau.
///
/// This is determined by a pivot rule selecting the entering column and the min-ratio test
/// selecting the leaving row.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum PivotSelection {
    /// Pivot at this location.
    Pivot {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
    },
    /// No column has a negative relative cost; the current basic solution is optimal.
    Optimal,
    /// The column selected to enter the basis has no positive value in any constraint row, so the
    /// objective can be increased without limit.
    Unbounded {
        #[allow(missing_docs)]
        column: usize,
    },
}
