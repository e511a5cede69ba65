//! Two variables, three constraints, optimum at a vertex.
//!
//! `max 2 x1 + x2 s.t. 8 x1 + 3 x2 <= 24, x1 + x2 <= 4, x1 + 4 x2 <= 12, x >= 0`
use crate::algorithm::PivotSelection;
use crate::algorithm::error::TableauError;
use crate::algorithm::strategy::pivot_rule::FirstProfitable;
use crate::algorithm::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::rational::RationalBig;
use crate::RB;

pub fn create_data() -> (Vec<Vec<i32>>, Vec<i32>, Vec<i32>) {
    (vec![vec![8, 3], vec![1, 1], vec![1, 4]], vec![24, 4, 12], vec![2, 1])
}

pub fn tableau_form() -> Tableau {
    let (a, b, c) = create_data();
    Tableau::new(&a, &b, &c).unwrap()
}

fn matrix(rows: Vec<Vec<RationalBig>>) -> DenseMatrix<RationalBig> {
    DenseMatrix::from_data(rows, 7)
}

pub fn initial_matrix() -> DenseMatrix<RationalBig> {
    matrix(vec![
        vec![RB!(8), RB!(3), RB!(1), RB!(0), RB!(0), RB!(0), RB!(24)],
        vec![RB!(1), RB!(1), RB!(0), RB!(1), RB!(0), RB!(0), RB!(4)],
        vec![RB!(1), RB!(4), RB!(0), RB!(0), RB!(1), RB!(0), RB!(12)],
        vec![RB!(-2), RB!(-1), RB!(0), RB!(0), RB!(0), RB!(1), RB!(0)],
    ])
}

pub fn first_pivot_matrix() -> DenseMatrix<RationalBig> {
    matrix(vec![
        vec![RB!(1), RB!(3, 8), RB!(1, 8), RB!(0), RB!(0), RB!(0), RB!(3)],
        vec![RB!(0), RB!(5, 8), RB!(-1, 8), RB!(1), RB!(0), RB!(0), RB!(1)],
        vec![RB!(0), RB!(29, 8), RB!(-1, 8), RB!(0), RB!(1), RB!(0), RB!(9)],
        vec![RB!(0), RB!(-1, 4), RB!(1, 4), RB!(0), RB!(0), RB!(1), RB!(6)],
    ])
}

pub fn optimal_matrix() -> DenseMatrix<RationalBig> {
    matrix(vec![
        vec![RB!(1), RB!(0), RB!(1, 5), RB!(-3, 5), RB!(0), RB!(0), RB!(12, 5)],
        vec![RB!(0), RB!(1), RB!(-1, 5), RB!(8, 5), RB!(0), RB!(0), RB!(8, 5)],
        vec![RB!(0), RB!(0), RB!(3, 5), RB!(-29, 5), RB!(1), RB!(0), RB!(16, 5)],
        vec![RB!(0), RB!(0), RB!(1, 5), RB!(2, 5), RB!(0), RB!(1), RB!(32, 5)],
    ])
}

#[test]
fn construction() {
    let tableau = tableau_form();
    assert_eq!(tableau.matrix(), &initial_matrix());
    assert_eq!(tableau.nr_rows(), 4);
    assert_eq!(tableau.nr_columns(), 7);
    assert_eq!(tableau.column_names(), vec!["x1", "x2", "s1", "s2", "s3", "val", "RHS"]);
    assert_eq!(tableau.row_labels(), vec!["cons1", "cons2", "cons3", "obj"]);
    assert_eq!(tableau.history_len(), 0);
}

#[test]
fn first_pivot() {
    let tableau = tableau_form();
    assert_eq!(tableau.find_pivot(), PivotSelection::Pivot { row: 0, column: 0 });

    let pivoted = tableau.pivot(0, 0).unwrap();
    assert_eq!(
        pivoted.row(0),
        &[RB!(1), RB!(3, 8), RB!(1, 8), RB!(0), RB!(0), RB!(0), RB!(3)],
    );
    assert_eq!(pivoted.matrix(), &first_pivot_matrix());
    assert_eq!(pivoted.find_pivot(), PivotSelection::Pivot { row: 1, column: 1 });

    // Not modified
    assert_eq!(tableau.matrix(), &initial_matrix());
    assert_eq!(tableau.history_len(), 0);
}

#[test]
fn solve() {
    let tableau = tableau_form();
    let solution = tableau.pivot_solve(false).unwrap();

    assert_eq!(solution.pivots, vec![(0, 0), (1, 1)]);
    assert_eq!(solution.nr_pivots(), 2);
    assert_eq!(solution.values, vec![RB!(12, 5), RB!(8, 5)]);
    assert_eq!(solution.objective_value, RB!(32, 5));

    assert_eq!(tableau.matrix(), &initial_matrix());
    assert_eq!(tableau.history_len(), 0);
}

#[test]
fn solve_in_place_and_restore() {
    let mut tableau = tableau_form();
    let solution = tableau.pivot_solve_in_place(true).unwrap();

    assert_eq!(solution.values, vec![RB!(12, 5), RB!(8, 5)]);
    assert_eq!(tableau.matrix(), &optimal_matrix());
    assert_eq!(tableau.history_len(), 2);
    assert_eq!(tableau.find_pivot(), PivotSelection::Optimal);
    assert_eq!(tableau.current_bfs(), solution.values);

    let restored = tableau.restore().unwrap();
    assert_eq!(restored.matrix(), &initial_matrix());
    assert_eq!(restored.history_len(), 0);
    assert_eq!(tableau.matrix(), &optimal_matrix());

    tableau.undo().unwrap();
    assert_eq!(tableau.matrix(), &first_pivot_matrix());
    assert_eq!(tableau.history_len(), 1);

    tableau.restore_in_place().unwrap();
    assert_eq!(tableau, tableau_form());
    assert_eq!(tableau.restore_in_place().unwrap_err(), TableauError::NoHistory);
}

#[test]
fn solving_an_optimal_tableau_records_nothing() {
    let mut tableau = tableau_form();
    tableau.pivot_solve_in_place(false).unwrap();
    let optimal = tableau.clone();

    let solution = tableau.pivot_solve_in_place(false).unwrap();
    assert!(solution.pivots.is_empty());
    assert_eq!(solution.objective_value, RB!(32, 5));
    assert_eq!(tableau, optimal);
}

#[test]
fn other_rule_same_optimum() {
    let solution = tableau_form().pivot_solve_with::<FirstProfitable>(false).unwrap();
    assert_eq!(solution.values, vec![RB!(12, 5), RB!(8, 5)]);
    assert_eq!(solution.objective_value, RB!(32, 5));
}

#[test]
fn floats() {
    let tableau = Tableau::new(
        &[[8_f64, 3.], [1., 1.], [1., 4.]],
        &[24., 4., 12.],
        &[2., 1.],
    ).unwrap();
    assert_eq!(tableau, tableau_form());
    assert!(tableau.matrix().rows().flatten().all(|value| value.is_integer()));
}

#[test]
fn display() {
    let expected = format!("\
x1  x2  s1  s2  s3  val  RHS
{}
 8   3   1   0   0    0   24
 1   1   0   1   0    0    4
 1   4   0   0   1    0   12
-2  -1   0   0   0    1    0
", "─".repeat(28));
    assert_eq!(tableau_form().to_string(), expected);

    let labelled = tableau_form().render(true).to_string();
    let lines = labelled.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "      │ x1  x2  s1  s2  s3  val  RHS");
    assert_eq!(lines[2], "cons1 │  8   3   1   0   0    0   24");
    assert_eq!(lines[5], "obj   │ -2  -1   0   0   0    1    0");

    let pivoted = tableau_form().pivot(0, 0).unwrap().to_string();
    assert!(pivoted.lines().nth(2).unwrap().starts_with(" 1   3/8   1/8"));
}
