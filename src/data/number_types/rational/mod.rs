//! # Rational numbers
//!
//! Arbitrary precision rationals are the only number type the tableau stores. Numerator and
//! denominator are `BigInt`s, reduced to lowest terms after every operation.
use num_traits::FromPrimitive;

pub use num_bigint::BigInt;
pub use num_rational::BigRational as RationalBig;

mod macros;

/// Exact conversion of user provided numbers into the tableau's number type.
///
/// Integers are converted without loss. Floats are converted to the exact dyadic rational they
/// represent, so `0.1f64` becomes `3602879701896397/36028797018963968` and not `1/10`. Values
/// without a finite representation (`NaN`, infinities) can't be converted.
pub trait ToExact {
    /// Convert this value to an exact rational.
    ///
    /// # Return value
    ///
    /// `None` if the value is not finite.
    fn to_exact(&self) -> Option<RationalBig>;
}

macro_rules! to_exact_integer {
    ($($t:ty),*) => {
        $(
            impl ToExact for $t {
                fn to_exact(&self) -> Option<RationalBig> {
                    Some(RationalBig::from_integer(BigInt::from(*self)))
                }
            }
        )*
    };
}
to_exact_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToExact for f32 {
    fn to_exact(&self) -> Option<RationalBig> {
        RationalBig::from_f32(*self)
    }
}

impl ToExact for f64 {
    fn to_exact(&self) -> Option<RationalBig> {
        RationalBig::from_f64(*self)
    }
}

impl ToExact for BigInt {
    fn to_exact(&self) -> Option<RationalBig> {
        Some(RationalBig::from_integer(self.clone()))
    }
}

impl ToExact for RationalBig {
    fn to_exact(&self) -> Option<RationalBig> {
        Some(self.clone())
    }
}

impl<T: ToExact + ?Sized> ToExact for &T {
    fn to_exact(&self) -> Option<RationalBig> {
        (**self).to_exact()
    }
}
