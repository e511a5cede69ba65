//! # Scenario tests on small linear programs.
//!
//! Convention for function names:
//!
//! * `fn create_data()`: the `A`, `b` and `c` of the problem
//! * `fn tableau_form()`: the tableau as constructed
//! * `fn initial_matrix()`, `fn first_pivot_matrix()`, `fn optimal_matrix()`: the matrix before and after pivoting
pub mod problem_1;
