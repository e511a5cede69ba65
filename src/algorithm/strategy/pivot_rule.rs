//! # Pivot rules
//!
//! Strategies for selecting the column that enters the basis.
use num_traits::Signed;

use crate::algorithm::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. That decision is made independent
/// of the strategy, by the min-ratio test.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// Only the decision and slack variable columns are candidates.
    ///
    /// # Return value
    ///
    /// The index of a column with a negative relative cost, or `None` if there is no such column,
    /// in which case the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<usize>;
}

/// Pivot on the column with the most negative relative cost.
///
/// Ties are broken in favor of the smallest column index. This is the rule used by default.
pub struct Dantzig;
impl PivotRule for Dantzig {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<usize> {
        tableau.variable_columns()
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|(_, cost)| cost.is_negative())
            // `min_by` returns the first of equal elements
            .min_by(|(_, left), (_, right)| left.cmp(right))
            .map(|(column, _)| column)
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<usize> {
        tableau.variable_columns()
            .find(|&column| tableau.relative_cost(column).is_negative())
    }
}
