use num_traits::{One, Zero};

use crate::algorithm::error::TableauError;
use crate::algorithm::tableau::Tableau;
use crate::data::number_types::rational::RationalBig;
use crate::tests::problem_1::{first_pivot_matrix, initial_matrix, tableau_form};
use crate::RB;

#[test]
fn dimension_mismatch() {
    let result = Tableau::new(&[[1, 2], [3, 4]], &[1], &[1, 1]);
    assert!(matches!(result, Err(TableauError::DimensionMismatch(_))));

    let result = Tableau::new(&[vec![1, 2], vec![3]], &[1, 1], &[1, 1]);
    assert!(matches!(result, Err(TableauError::DimensionMismatch(_))));

    let result = Tableau::new(&[[1, 2]], &[1], &[1, 1, 1]);
    assert!(matches!(result, Err(TableauError::DimensionMismatch(_))));
}

#[test]
fn non_finite() {
    let result = Tableau::new(&[[1_f64, f64::NAN]], &[1.], &[1., 1.]);
    assert_eq!(result, Err(TableauError::NonFinite {
        location: "A[0][1]".to_string(),
        value: "NaN".to_string(),
    }));

    let result = Tableau::new(&[[1_f64]], &[f64::INFINITY], &[1.]);
    assert!(matches!(result, Err(TableauError::NonFinite { location, .. }) if location == "b[0]"));
}

#[test]
fn layout() {
    let tableau = Tableau::new(&[[3, 5, 7], [2, 4, 6]], &[1, 2], &[9, 8, 7]).unwrap();

    assert_eq!(tableau.nr_variables(), 3);
    assert_eq!(tableau.nr_constraints(), 2);
    assert_eq!(tableau.nr_rows(), 3);
    assert_eq!(tableau.nr_columns(), 7);
    assert_eq!(tableau.objective_row_index(), 2);
    assert_eq!(tableau.val_column_index(), 5);
    assert_eq!(tableau.rhs_column_index(), 6);
    assert_eq!(tableau.variable_columns(), 0..5);

    // Slack columns form an identity over the constraint rows
    for i in 0..2 {
        for s in 0..2 {
            let expected = if i == s { RationalBig::one() } else { RationalBig::zero() };
            assert_eq!(tableau.get(i, 3 + s), Some(&expected));
        }
        assert_eq!(tableau.get(i, 5), Some(&RB!(0)));
    }
    assert_eq!(tableau.row(2), &[RB!(-9), RB!(-8), RB!(-7), RB!(0), RB!(0), RB!(1), RB!(0)]);
    assert_eq!(tableau.get(3, 0), None);
    assert_eq!(tableau.get(0, 7), None);

    assert_eq!(tableau.basic_row(3), Some(0));
    assert_eq!(tableau.basic_row(4), Some(1));
    assert_eq!(tableau.basic_row(0), None);
    assert_eq!(tableau.current_bfs(), vec![RB!(0), RB!(0), RB!(0)]);
    assert_eq!(tableau.objective_value(), &RB!(0));
}

#[test]
fn zero_pivot() {
    let mut tableau = tableau_form();
    // s2 has a zero in the first row
    assert_eq!(tableau.pivot(0, 3), Err(TableauError::ZeroPivot { row: 0, column: 3 }));
    assert_eq!(
        tableau.pivot_in_place(0, 3).unwrap_err(),
        TableauError::ZeroPivot { row: 0, column: 3 },
    );
    assert_eq!(tableau.matrix(), &initial_matrix());
    assert_eq!(tableau.history_len(), 0);
}

#[test]
fn out_of_bounds() {
    let mut tableau = tableau_form();
    assert_eq!(tableau.pivot_in_place(4, 0).unwrap_err(), TableauError::OutOfBounds {
        row: 4,
        column: 0,
        nr_rows: 4,
        nr_columns: 7,
    });
    assert!(matches!(tableau.pivot(0, 7), Err(TableauError::OutOfBounds { .. })));
    assert_eq!(tableau, tableau_form());
}

#[test]
fn pivot_in_place_records() {
    let mut tableau = tableau_form();
    tableau.pivot_in_place(0, 0).unwrap().pivot_in_place(1, 1).unwrap();
    assert_eq!(tableau.history_len(), 2);
    assert_eq!(tableau.original_matrix(), &initial_matrix());

    tableau.undo().unwrap();
    assert_eq!(tableau.matrix(), &first_pivot_matrix());
    tableau.undo().unwrap();
    assert_eq!(tableau.matrix(), &initial_matrix());
    assert_eq!(tableau.undo().unwrap_err(), TableauError::NoHistory);
}

#[test]
fn unit_column_after_pivot() {
    let tableau = tableau_form();
    for (row, column) in [(0, 0), (2, 1), (1, 0), (2, 4)] {
        let pivoted = tableau.pivot(row, column).unwrap();
        for (i, value) in pivoted.matrix().column(column).enumerate() {
            if i == row {
                assert!(value.is_one());
            } else {
                assert!(value.is_zero());
            }
        }
    }
}

#[test]
fn manual_pivot_on_objective_row() {
    let tableau = tableau_form();
    let pivoted = tableau.pivot(3, 0).unwrap();
    assert_eq!(pivoted.row(3), &[RB!(1), RB!(1, 2), RB!(0), RB!(0), RB!(0), RB!(-1, 2), RB!(0)]);
    assert_eq!(pivoted.basic_row(0), None);
}

#[test]
fn min_ratio_tie() {
    let tableau = Tableau::new(&[[2], [1]], &[4, 2], &[1]).unwrap();
    assert_eq!(tableau.select_primal_pivot_row(0), Some(0));

    // Nonpositive values are skipped
    let tableau = Tableau::new(&[[-1], [0], [3]], &[1, 1, 6], &[1]).unwrap();
    assert_eq!(tableau.select_primal_pivot_row(0), Some(2));
}

#[test]
fn restore_without_history() {
    let mut tableau = tableau_form();
    assert_eq!(tableau.restore(), Err(TableauError::NoHistory));
    assert_eq!(tableau.restore_in_place().unwrap_err(), TableauError::NoHistory);
    assert_eq!(tableau.original_matrix(), &initial_matrix());

    // Non-mutating pivots aren't recorded
    let pivoted = tableau.pivot(0, 0).unwrap();
    assert_eq!(pivoted.restore(), Err(TableauError::NoHistory));
}

#[test]
fn restore_leaves_original_untouched() {
    let mut tableau = tableau_form();
    tableau.pivot_in_place(0, 0).unwrap();

    let restored = tableau.restore().unwrap();
    assert_eq!(restored, tableau_form());
    assert_eq!(tableau.matrix(), &first_pivot_matrix());
    assert_eq!(tableau.history_len(), 1);
}
