/// Shorthand for creating a big rational number.
///
/// `RB!(n)` creates the integer `n`, `RB!(n, d)` the fraction `n / d` in lowest terms.
///
/// # Panics
///
/// When the denominator is zero.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::rational::RationalBig::from_integer(
            $crate::data::number_types::rational::BigInt::from($value)
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::RationalBig::new(
            $crate::data::number_types::rational::BigInt::from($numer),
            $crate::data::number_types::rational::BigInt::from($denom),
        )
    };
}
