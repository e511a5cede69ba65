//! # History
//!
//! Every mutating pivot records the matrix it replaced. That record is used to bring a tableau
//! back to the state in which it was constructed.
use log::trace;

use crate::algorithm::error::TableauError;
use crate::algorithm::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::rational::RationalBig;

impl Tableau {
    /// Revert this tableau to the matrix it had before its first recorded pivot.
    ///
    /// All recorded states are discarded.
    ///
    /// # Errors
    ///
    /// `NoHistory` if no pivot was recorded.
    pub fn restore_in_place(&mut self) -> Result<&mut Self, TableauError> {
        let nr_recorded = self.history.len();
        let original = self.history.drain(..).next().ok_or(TableauError::NoHistory)?;
        self.matrix = original;
        trace!("Restored the original tableau, discarding {} recorded states", nr_recorded);

        Ok(self)
    }

    /// A new tableau with the matrix this tableau had before its first recorded pivot.
    ///
    /// This tableau is not modified. The returned tableau has no history.
    ///
    /// # Errors
    ///
    /// `NoHistory` if no pivot was recorded.
    pub fn restore(&self) -> Result<Tableau, TableauError> {
        let original = self.history.first().ok_or(TableauError::NoHistory)?;

        Ok(Tableau::from_matrix(original.clone(), self.nr_variables, self.nr_constraints))
    }

    /// Revert only the most recent recorded pivot.
    ///
    /// # Errors
    ///
    /// `NoHistory` if no pivot was recorded.
    pub fn undo(&mut self) -> Result<&mut Self, TableauError> {
        let previous = self.history.pop().ok_or(TableauError::NoHistory)?;
        self.matrix = previous;
        trace!("Undid a pivot, {} recorded states remain", self.history.len());

        Ok(self)
    }

    /// Drop every state recorded after the first `nr_recorded`, returning to the matrix as it was
    /// when that many states were recorded.
    pub(crate) fn rollback_to(&mut self, nr_recorded: usize) {
        debug_assert!(nr_recorded <= self.history.len());

        if let Some(matrix) = self.history.drain(nr_recorded..).next() {
            self.matrix = matrix;
            trace!("Rolled back to {} recorded states", nr_recorded);
        }
    }

    /// Number of recorded states, equal to the number of pivots since construction or the last
    /// restore.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The matrix this tableau was constructed with.
    pub fn original_matrix(&self) -> &DenseMatrix<RationalBig> {
        self.history.first().unwrap_or(&self.matrix)
    }
}
