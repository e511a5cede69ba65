//! # Solving by pivoting
//!
//! Repeatedly pivot where the pivot rule and the min-ratio test point, until the tableau is optimal
//! or the linear program turns out to be unbounded.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;
use log::{debug, info};
use num_traits::Zero;

use crate::algorithm::PivotSelection;
use crate::algorithm::error::TableauError;
use crate::algorithm::strategy::pivot_rule::{Dantzig, PivotRule};
use crate::algorithm::tableau::Tableau;
use crate::data::number_types::rational::RationalBig;

/// Optimal solution found by pivoting.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Solution {
    /// Value of each decision variable, in column order.
    pub values: Vec<RationalBig>,
    /// Value of `c^T x` at `values`.
    pub objective_value: RationalBig,
    /// Locations pivoted at, in order.
    pub pivots: Vec<(usize, usize)>,
}

impl Solution {
    /// Number of pivots it took to reach the optimum.
    pub fn nr_pivots(&self) -> usize {
        self.pivots.len()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Optimum value after {} iterations = {}", self.nr_pivots(), self.objective_value)?;
        writeln!(f, "[{}]", self.values.iter().join(", "))
    }
}

impl Tableau {
    /// Solve the linear program without modifying this tableau.
    ///
    /// Pivots on a copy, using the `Dantzig` rule. When `verbose`, every pivot location and the
    /// tableau it results in are written to standard output.
    ///
    /// # Errors
    ///
    /// `UnboundedLp` if the linear program has no finite optimum.
    pub fn pivot_solve(&self, verbose: bool) -> Result<Solution, TableauError> {
        self.pivot_solve_with::<Dantzig>(verbose)
    }

    /// Solve the linear program without modifying this tableau, using pivot rule `PR`.
    pub fn pivot_solve_with<PR: PivotRule>(&self, verbose: bool) -> Result<Solution, TableauError> {
        let mut copy = self.clone();
        copy.pivot_solve_in_place_with::<PR>(verbose)
    }

    /// Solve the linear program, leaving this tableau in its final state.
    ///
    /// Each pivot is recorded, such that the original tableau can be restored. If the linear
    /// program turns out to be unbounded, the pivots made are undone and the tableau and its
    /// history are left as they were before the call.
    ///
    /// # Errors
    ///
    /// `UnboundedLp` if the linear program has no finite optimum.
    pub fn pivot_solve_in_place(&mut self, verbose: bool) -> Result<Solution, TableauError> {
        self.pivot_solve_in_place_with::<Dantzig>(verbose)
    }

    /// Solve the linear program with pivot rule `PR`, leaving this tableau in its final state.
    pub fn pivot_solve_in_place_with<PR: PivotRule>(
        &mut self,
        verbose: bool,
    ) -> Result<Solution, TableauError> {
        let mut rule = PR::new();
        let mut pivots = Vec::new();
        let nr_recorded = self.history_len();
        if verbose {
            println!("{}", self);
        }

        loop {
            match self.find_pivot_using(&mut rule) {
                PivotSelection::Pivot { row, column } => {
                    if let Err(error) = self.pivot_in_place(row, column) {
                        self.rollback_to(nr_recorded);
                        return Err(error);
                    }
                    pivots.push((row, column));
                    debug!("Pivot {} at ({}, {}), objective value {}", pivots.len(), row, column, self.objective_value());
                    if verbose {
                        println!("\nPivot at ({}, {})\n\n{}", row, column, self);
                    }
                },
                PivotSelection::Optimal => break,
                PivotSelection::Unbounded { column } => {
                    info!("Unbounded in the direction of column {} after {} pivots", column, pivots.len());
                    self.rollback_to(nr_recorded);
                    return Err(TableauError::UnboundedLp { column });
                },
            }
        }

        let solution = Solution {
            values: self.current_bfs(),
            objective_value: self.objective_value().clone(),
            pivots,
        };
        info!("Optimum {} reached after {} pivots", solution.objective_value, solution.nr_pivots());
        if verbose {
            println!("Optimum value after {} iterations = {}", solution.nr_pivots(), solution.objective_value);
        }

        Ok(solution)
    }

    /// Values of the decision variables in the current basic solution.
    ///
    /// A decision variable is basic if its column is a unit column with the `1` in a constraint
    /// row; its value is the right-hand side of that row. If several columns are a unit column in
    /// the same row, only the first one is basic. Non-basic variables are zero.
    pub fn current_bfs(&self) -> Vec<RationalBig> {
        let mut claimed = vec![false; self.nr_constraints()];

        (0..self.nr_variables())
            .map(|column| match self.basic_row(column) {
                Some(row) if !claimed[row] => {
                    claimed[row] = true;
                    self.rhs(row).clone()
                },
                _ => RationalBig::zero(),
            })
            .collect()
    }
}
