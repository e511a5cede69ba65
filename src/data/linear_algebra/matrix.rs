//! # Dense matrices
//!
//! Simplex tableaux for illustration are small and fill in quickly while pivoting, so they are
//! stored densely. Rows are stored contiguously, which suits the row operations of Gauss-Jordan
//! elimination.
use std::slice::Iter;

use crate::data::number_types::traits::{Field, FieldRef};

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation. Indices
/// start at `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from row-major data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of length `nr_columns`.
    /// * `nr_columns`: Number of columns. Needed separately, because `data` might not contain any
    /// rows.
    pub fn from_data(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        let nr_rows = data.len();
        Self { data, nr_rows, nr_columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// All values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Iter<'_, Vec<F>> {
        self.data.iter()
    }

    /// All values in column `j` of this matrix, top to bottom.
    pub fn column(&self, j: usize) -> impl ExactSizeIterator<Item=&F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| &row[j])
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the number of values in this matrix.
    pub fn size(&self) -> usize {
        self.nr_rows * self.nr_columns
    }

    /// Whether `(i, j)` is a valid coordinate.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.nr_rows && j < self.nr_columns
    }
}

impl<F: Field> DenseMatrix<F> {
    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self::from_data(vec![vec![F::zero(); nr_columns]; nr_rows], nr_columns)
    }
}

impl<F> DenseMatrix<F>
where
    F: Field,
    for<'r> &'r F: FieldRef<F>,
{
    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: &F) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value = &*value * factor;
        }
    }

    /// Divide row `i` by `divisor`.
    ///
    /// The divisor should be nonzero.
    pub fn divide_row(&mut self, i: usize, divisor: &F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(!divisor.is_zero());

        for value in &mut self.data[i] {
            *value = &*value / divisor;
        }
    }

    /// Subtract `factor` times row `read_row` from row `write_row`.
    pub fn subtract_multiple_of_row(&mut self, read_row: usize, write_row: usize, factor: &F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        if factor.is_zero() {
            return;
        }

        let (read, write) = if read_row < write_row {
            let (left, right) = self.data.split_at_mut(write_row);
            (&left[read_row], &mut right[0])
        } else {
            let (left, right) = self.data.split_at_mut(read_row);
            (&right[0], &mut left[write_row])
        };

        for (target, source) in write.iter_mut().zip(read.iter()) {
            if !source.is_zero() {
                *target -= &(factor * source);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::number_types::rational::RationalBig;
    use crate::RB;

    fn matrix() -> DenseMatrix<RationalBig> {
        DenseMatrix::from_data(vec![
            vec![RB!(1), RB!(2), RB!(3)],
            vec![RB!(4), RB!(5), RB!(6)],
        ], 3)
    }

    #[test]
    fn dimensions() {
        let m = matrix();
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_eq!(m.size(), 6);
        assert!(m.contains(1, 2));
        assert!(!m.contains(2, 0));
        assert!(!m.contains(0, 3));

        let empty = DenseMatrix::<RationalBig>::from_data(vec![], 4);
        assert_eq!(empty.nr_rows(), 0);
        assert_eq!(empty.nr_columns(), 4);
    }

    #[test]
    fn access() {
        let mut m = matrix();
        assert_eq!(m.get_value(1, 0), &RB!(4));
        assert_eq!(m.column(2).cloned().collect::<Vec<_>>(), vec![RB!(3), RB!(6)]);
        assert_eq!(m.row(0), &[RB!(1), RB!(2), RB!(3)]);

        m.set_value(0, 0, RB!(7, 2));
        assert_eq!(m.get_value(0, 0), &RB!(7, 2));
        assert_eq!(DenseMatrix::<RationalBig>::zeros(2, 2).get_value(1, 1), &RB!(0));
    }

    #[test]
    fn row_operations() {
        let mut m = matrix();
        m.divide_row(0, &RB!(2));
        assert_eq!(m.row(0), &[RB!(1, 2), RB!(1), RB!(3, 2)]);
        m.multiply_row(0, &RB!(2));
        assert_eq!(m.row(0), &[RB!(1), RB!(2), RB!(3)]);

        m.subtract_multiple_of_row(0, 1, &RB!(4));
        assert_eq!(m.row(1), &[RB!(0), RB!(-3), RB!(-6)]);
        m.subtract_multiple_of_row(1, 0, &RB!(-2, 3));
        assert_eq!(m.row(0), &[RB!(1), RB!(0), RB!(-1)]);
    }
}
