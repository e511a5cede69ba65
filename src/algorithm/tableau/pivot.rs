//! # Pivoting
//!
//! Gauss-Jordan elimination on the tableau matrix, and the selection of the location the simplex
//! method pivots on next.
use std::mem;

use log::{debug, trace};
use num_traits::Signed;

use crate::algorithm::PivotSelection;
use crate::algorithm::error::TableauError;
use crate::algorithm::strategy::pivot_rule::{Dantzig, PivotRule};
use crate::algorithm::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::rational::RationalBig;
use crate::data::number_types::traits::{Field, FieldRef};

impl Tableau {
    /// Pivot at row `i` and column `j`, returning the result as a new tableau.
    ///
    /// Column `j` of the result is a unit column with its `1` in row `i`. This tableau and its
    /// history are not modified; the returned tableau has no history.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the location doesn't exist, `ZeroPivot` if the value there is zero.
    pub fn pivot(&self, i: usize, j: usize) -> Result<Tableau, TableauError> {
        let matrix = eliminate(&self.matrix, i, j)?;

        Ok(Tableau::from_matrix(matrix, self.nr_variables, self.nr_constraints))
    }

    /// Pivot at row `i` and column `j`, modifying this tableau.
    ///
    /// The matrix as it was before the pivot is recorded, see `restore_in_place`. On error, nothing
    /// is modified and nothing is recorded.
    ///
    /// # Return value
    ///
    /// This tableau, for chaining.
    pub fn pivot_in_place(&mut self, i: usize, j: usize) -> Result<&mut Self, TableauError> {
        let matrix = eliminate(&self.matrix, i, j)?;

        let previous = mem::replace(&mut self.matrix, matrix);
        self.history.push(previous);
        trace!("Recorded state {} before pivot at ({}, {})", self.history.len(), i, j);

        Ok(self)
    }

    /// The location the simplex method would pivot at next, using the default `Dantzig` rule.
    pub fn find_pivot(&self) -> PivotSelection {
        self.find_pivot_with::<Dantzig>()
    }

    /// The location the simplex method would pivot at next, using pivot rule `PR`.
    pub fn find_pivot_with<PR: PivotRule>(&self) -> PivotSelection {
        self.find_pivot_using(&mut PR::new())
    }

    /// Select an entering column with an existing rule instance and a leaving row with the
    /// min-ratio test.
    pub(crate) fn find_pivot_using<PR: PivotRule>(&self, rule: &mut PR) -> PivotSelection {
        match rule.select_primal_pivot_column(self) {
            Some(column) => match self.select_primal_pivot_row(column) {
                Some(row) => PivotSelection::Pivot { row, column },
                None => PivotSelection::Unbounded { column },
            },
            None => PivotSelection::Optimal,
        }
    }

    /// The min-ratio test.
    ///
    /// Among the constraint rows with a strictly positive value in column `column`, select the one
    /// minimizing the ratio between the right-hand side and that value. Ties go to the smallest
    /// row index.
    ///
    /// # Return value
    ///
    /// `None` if no constraint row has a positive value in this column: increasing the variable
    /// doesn't make any constraint binding.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen index, minimum ratio)
        let mut min_values: Option<(usize, RationalBig)> = None;
        for row in 0..self.nr_constraints {
            let xij = self.matrix.get_value(row, column);
            if xij.is_positive() {
                let ratio = self.rhs(row) / xij;
                match &mut min_values {
                    Some((min_index, min_ratio)) => if &ratio < min_ratio {
                        *min_index = row;
                        *min_ratio = ratio;
                    },
                    None => min_values = Some((row, ratio)),
                }
            }
        }

        if let Some((row, ratio)) = &min_values {
            debug!("Min-ratio test on column {} selects row {} with ratio {}", column, row, ratio);
        }
        min_values.map(|(row, _)| row)
    }
}

/// Gauss-Jordan elimination making column `j` a unit column with its `1` in row `i`.
///
/// Row `i` is divided by the pivot value, after which a multiple of it is subtracted from every
/// other row. The input is not modified.
pub(crate) fn eliminate<F>(
    matrix: &DenseMatrix<F>,
    i: usize,
    j: usize,
) -> Result<DenseMatrix<F>, TableauError>
where
    F: Field,
    for<'r> &'r F: FieldRef<F>,
{
    if !matrix.contains(i, j) {
        return Err(TableauError::OutOfBounds {
            row: i,
            column: j,
            nr_rows: matrix.nr_rows(),
            nr_columns: matrix.nr_columns(),
        });
    }
    let pivot_value = matrix.get_value(i, j);
    if pivot_value.is_zero() {
        return Err(TableauError::ZeroPivot { row: i, column: j });
    }

    let mut result = matrix.clone();
    // The order matters: the pivot row needs to be normalized before the others are reduced
    result.divide_row(i, pivot_value);
    for edit_row in (0..result.nr_rows()).filter(|&r| r != i) {
        let factor = result.get_value(edit_row, j).clone();
        result.subtract_multiple_of_row(i, edit_row, &factor);
    }

    debug_assert!(result.column(j).enumerate().all(|(r, value)| {
        if r == i { value.is_one() } else { value.is_zero() }
    }));
    debug!("Pivoted at ({}, {}) on value {}", i, j, pivot_value);

    Ok(result)
}
