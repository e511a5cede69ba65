//! # Simplex tableaux
//!
//! The tableau of a linear program `max c^T x s.t. Ax <= b, x >= 0` as used for the Gauss-Jordan
//! variant of the simplex method. It is stored as a dense matrix of exact rationals with columns
//!
//! ```text
//! x1 .. xp | s1 .. sk | val | RHS
//! ```
//!
//! that is, the decision variables, one slack variable per constraint, the objective value column
//! and the right-hand side. The `k` constraint rows are followed by a single objective row, which
//! holds `-c` in the decision variable columns.
use num_traits::{One, Zero};

use crate::algorithm::error::TableauError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::rational::{RationalBig, ToExact};

pub mod display;
pub mod history;
pub mod pivot;

#[cfg(test)]
mod test;

/// Matrix encoding of a linear program in simplex form, together with a record of the states it
/// went through.
///
/// Mutating operations (`pivot_in_place`, `pivot_solve_in_place`) record the matrix as it was
/// before they changed it, such that the original tableau can be restored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tableau {
    /// Size (k + 1) x (p + k + 2).
    matrix: DenseMatrix<RationalBig>,
    /// Number of decision variables `p`.
    nr_variables: usize,
    /// Number of constraints `k`.
    nr_constraints: usize,
    /// Matrices before each recorded pivot, oldest first.
    history: Vec<DenseMatrix<RationalBig>>,
}

impl Tableau {
    /// Set up the tableau for `max c^T x s.t. Ax <= b, x >= 0`.
    ///
    /// All values are converted to exact rationals; see `ToExact` for how floats are treated.
    ///
    /// # Arguments
    ///
    /// * `a`: Constraint matrix of size `k` x `p`, given as rows.
    /// * `b`: Right-hand side of length `k`. Should be nonnegative, this is not checked.
    /// * `c`: Cost vector of length `p`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the number of rows of `a` differs from the length of `b`, or when a
    /// row of `a` doesn't have the length of `c`. `NonFinite` when a value can't be represented.
    pub fn new<R, T>(a: &[R], b: &[T], c: &[T]) -> Result<Self, TableauError>
    where
        R: AsRef<[T]>,
        T: ToExact + std::fmt::Debug,
    {
        let nr_constraints = a.len();
        let nr_variables = c.len();

        if b.len() != nr_constraints {
            return Err(TableauError::DimensionMismatch(format!(
                "A has {} rows, but b has {} entries", nr_constraints, b.len(),
            )));
        }
        if let Some((i, row)) = a.iter()
            .map(<R as AsRef<[T]>>::as_ref)
            .enumerate()
            .find(|(_, row)| row.len() != nr_variables) {
            return Err(TableauError::DimensionMismatch(format!(
                "row {} of A has {} entries, but c has {}", i, row.len(), nr_variables,
            )));
        }

        let nr_columns = nr_variables + nr_constraints + 2;
        let mut rows = Vec::with_capacity(nr_constraints + 1);
        for (i, (row, b_i)) in a.iter().map(<R as AsRef<[T]>>::as_ref).zip(b).enumerate() {
            let mut values = Vec::with_capacity(nr_columns);
            for (j, value) in row.iter().enumerate() {
                values.push(exact(value, || format!("A[{}][{}]", i, j))?);
            }
            values.extend((0..nr_constraints).map(|s| {
                if s == i { RationalBig::one() } else { RationalBig::zero() }
            }));
            values.push(RationalBig::zero());
            values.push(exact(b_i, || format!("b[{}]", i))?);
            rows.push(values);
        }

        let mut objective = Vec::with_capacity(nr_columns);
        for (j, value) in c.iter().enumerate() {
            objective.push(-exact(value, || format!("c[{}]", j))?);
        }
        objective.extend((0..nr_constraints).map(|_| RationalBig::zero()));
        objective.push(RationalBig::one());
        objective.push(RationalBig::zero());
        rows.push(objective);

        Ok(Self::from_matrix(DenseMatrix::from_data(rows, nr_columns), nr_variables, nr_constraints))
    }

    /// Wrap a matrix that already has the tableau layout, without any history.
    pub(crate) fn from_matrix(
        matrix: DenseMatrix<RationalBig>,
        nr_variables: usize,
        nr_constraints: usize,
    ) -> Self {
        debug_assert_eq!(matrix.nr_rows(), nr_constraints + 1);
        debug_assert_eq!(matrix.nr_columns(), nr_variables + nr_constraints + 2);

        Self { matrix, nr_variables, nr_constraints, history: Vec::new() }
    }

    /// The value at row `i` and column `j`, if that location exists.
    pub fn get(&self, i: usize, j: usize) -> Option<&RationalBig> {
        if self.matrix.contains(i, j) {
            Some(self.matrix.get_value(i, j))
        } else {
            None
        }
    }

    /// The current matrix.
    pub fn matrix(&self) -> &DenseMatrix<RationalBig> {
        &self.matrix
    }

    /// All values of row `i`.
    pub fn row(&self, i: usize) -> &[RationalBig] {
        self.matrix.row(i)
    }

    /// Number of rows, the objective row included.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// Number of columns, the `val` and `RHS` columns included.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of constraints, equal to the number of slack variables.
    pub fn nr_constraints(&self) -> usize {
        self.nr_constraints
    }

    /// Index of the objective row, which is always the last row.
    pub fn objective_row_index(&self) -> usize {
        self.nr_constraints
    }

    /// Index of the `val` column.
    pub fn val_column_index(&self) -> usize {
        self.nr_variables + self.nr_constraints
    }

    /// Index of the right-hand side column, which is always the last column.
    pub fn rhs_column_index(&self) -> usize {
        self.nr_variables + self.nr_constraints + 1
    }

    /// Indices of the columns of the decision and slack variables.
    pub fn variable_columns(&self) -> std::ops::Range<usize> {
        0..(self.nr_variables + self.nr_constraints)
    }

    /// Value of the objective row in column `j`.
    ///
    /// For the decision and slack variable columns, these are the relative costs: a negative value
    /// means that the objective can be increased by bringing that variable into the basis.
    pub fn relative_cost(&self, j: usize) -> &RationalBig {
        debug_assert!(self.variable_columns().contains(&j));

        self.matrix.get_value(self.objective_row_index(), j)
    }

    /// Right-hand side value of row `i`.
    pub fn rhs(&self, i: usize) -> &RationalBig {
        self.matrix.get_value(i, self.rhs_column_index())
    }

    /// Objective function value of the current basic solution.
    ///
    /// Because the objective row holds `-c`, the right-hand side of that row is the value of
    /// `c^T x` itself.
    pub fn objective_value(&self) -> &RationalBig {
        self.rhs(self.objective_row_index())
    }

    /// Column headings: `x1, x2, ..`, then `s1, s2, ..`, then `val` and `RHS`.
    pub fn column_names(&self) -> Vec<String> {
        (1..=self.nr_variables).map(|j| format!("x{}", j))
            .chain((1..=self.nr_constraints).map(|j| format!("s{}", j)))
            .chain(["val".to_string(), "RHS".to_string()])
            .collect()
    }

    /// Row labels: `cons1, cons2, ..` for the constraints, then `obj`.
    ///
    /// Only used for display, they carry no algorithmic meaning.
    pub fn row_labels(&self) -> Vec<String> {
        (1..=self.nr_constraints).map(|i| format!("cons{}", i))
            .chain(std::iter::once("obj".to_string()))
            .collect()
    }

    /// Row in which decision or slack column `j` is basic.
    ///
    /// A column is basic when it is a unit column with its `1` in a constraint row.
    pub fn basic_row(&self, j: usize) -> Option<usize> {
        let mut nonzero = self.matrix.column(j)
            .enumerate()
            .filter(|(_, value)| !value.is_zero());

        match (nonzero.next(), nonzero.next()) {
            (Some((i, value)), None) if i < self.nr_constraints && value.is_one() => Some(i),
            _ => None,
        }
    }
}

/// Convert a single input value, naming its location if that fails.
fn exact<T: ToExact + std::fmt::Debug>(
    value: &T,
    location: impl FnOnce() -> String,
) -> Result<RationalBig, TableauError> {
    value.to_exact().ok_or_else(|| TableauError::NonFinite {
        location: location(),
        value: format!("{:?}", value),
    })
}
