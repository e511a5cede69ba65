//! # Traits
//!
//! The dense matrix operations and the pivot arithmetic are written against these bounds, so that
//! they can be exercised with any exact number type. Within this crate, they are only ever instantiated with `RationalBig`.
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

/// Basic field operations with `Self` and with references to `Self`.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Field:
    Eq +
    Zero +
    One +
    Neg<Output=Self> +
    Add<Output=Self> +
    Sub<Output=Self> +
    for<'r> SubAssign<&'r Self> +
    Mul<Output=Self> +
    Div<Output=Self> +
    Clone +
    Display +
    Debug +
{
}
impl<T> Field for T
where
    T: Eq + Zero + One + Neg<Output=T> + Add<Output=T> + Sub<Output=T> + for<'r> SubAssign<&'r T>
        + Mul<Output=T> + Div<Output=T> + Clone + Display + Debug,
{
}

/// Field operations on references, such that no clones are needed for intermediate values.
///
/// Used as `for<'r> &'r F: FieldRef<F>`.
pub trait FieldRef<Deref>:
    Sized +
    Mul<Self, Output=Deref> +
    Div<Self, Output=Deref> +
    Sub<Self, Output=Deref> +
    Neg<Output=Deref> +
{
}
impl<'r, F: 'r> FieldRef<F> for &'r F
where
    &'r F: Mul<&'r F, Output=F> + Div<&'r F, Output=F> + Sub<&'r F, Output=F> + Neg<Output=F>,
{
}
