//! # Error reporting for tableau operations
//!
//! Every failure of a tableau operation is reported as a distinct variant. None of them is retried
//! internally, and a failed operation never leaves a partially modified matrix behind.
use thiserror::Error;

/// A `TableauError` is returned when an operation on a tableau can't be completed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableauError {
    /// The shapes of the constraint matrix, right-hand side and cost vector don't agree.
    ///
    /// The contained `String` is a message for the end user.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    /// An input value has no exact rational representation, such as `NaN` or an infinity.
    #[error("value {value} at {location} is not finite")]
    NonFinite {
        /// Where in the input the value was found, e.g. `A[1][0]`.
        location: String,
        /// The offending value, formatted.
        value: String,
    },
    /// A pivot was requested at a location outside of the matrix.
    #[error("location ({row}, {column}) is outside of the {nr_rows}x{nr_columns} tableau")]
    OutOfBounds {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
        #[allow(missing_docs)]
        nr_rows: usize,
        #[allow(missing_docs)]
        nr_columns: usize,
    },
    /// A pivot was requested at a location whose value is exactly zero.
    #[error("can't pivot at ({row}, {column}): the entry is zero")]
    ZeroPivot {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
    },
    /// The linear program has no finite optimum.
    ///
    /// The objective can be improved without limit by increasing the variable of `column`.
    #[error("the linear program is unbounded in the direction of column {column}")]
    UnboundedLp {
        #[allow(missing_docs)]
        column: usize,
    },
    /// Restoration was requested, but no pivot was ever recorded.
    #[error("no pivot has been recorded, there is nothing to restore")]
    NoHistory,
}
