//! Number checks
//!
//! Sign, integrality and decimal-precision checks for every primitive
//! numeric type, plus the ordered comparisons re-exported from
//! [`compare`](crate::compare).
//!
//! # Example
//!
//! ```rust
//! use argguard::number;
//!
//! assert_eq!(number::must_be_between(Some(2), Some(&1), Some(&3), true), Ok(Some(2)));
//! assert_eq!(number::is_float(Some(&0.12), Some(2)), Ok(false));
//! assert_eq!(number::is_float(Some(&0.12), Some(1)), Ok(true));
//! assert_eq!(number::when_negative(Some(-4), Some(0)), Some(0));
//! ```

pub use crate::compare::*;
use crate::error::{required, Result};
use crate::guard::{cannot, must, when, when_not};

/// A primitive number.
pub trait Number: Ordered + Copy {
    /// The additive identity.
    fn zero() -> Self;

    /// Whether the value equals its nearest integer.
    fn is_integral(self) -> bool;

    /// The value rounded to `places` decimal places.
    fn round_to(self, places: usize) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ty),+) => {
        $(
            impl Number for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn is_integral(self) -> bool {
                    true
                }

                #[inline]
                fn round_to(self, _places: usize) -> Self {
                    self
                }
            }
        )+
    };
}

// Every finite binary float has an exact decimal form within this many
// places, and formatting precision is capped at 16 bits.
const EXACT_DECIMAL_PLACES: usize = 1_100;

// Rounds through fixed-precision decimal formatting: 0.12 equals its
// two-place form, 0.125 does not.
macro_rules! impl_float {
    ($($ty:ty),+) => {
        $(
            impl Number for $ty {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn is_integral(self) -> bool {
                    self == self.round()
                }

                fn round_to(self, places: usize) -> Self {
                    if places >= EXACT_DECIMAL_PLACES {
                        return self;
                    }
                    format!("{:.*}", places, self).parse().unwrap_or(self)
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

/// Check if a number is greater than zero.
pub fn is_positive<N: Number>(value: Option<&N>) -> bool {
    value.is_some_and(|v| *v > N::zero())
}

/// Check if a number is less than zero.
pub fn is_negative<N: Number>(value: Option<&N>) -> bool {
    value.is_some_and(|v| *v < N::zero())
}

/// Check if a number equals zero.
pub fn is_zero<N: Number>(value: Option<&N>) -> bool {
    value.is_some_and(|v| *v == N::zero())
}

/// Check if a number equals its nearest integer.
///
/// ```rust
/// use argguard::number::is_integer;
///
/// assert!(is_integer(Some(&3)));
/// assert!(is_integer(Some(&3.0)));
/// assert!(!is_integer(Some(&3.5)));
/// assert!(!is_integer::<i32>(None));
/// ```
pub fn is_integer<N: Number>(value: Option<&N>) -> bool {
    value.is_some_and(|v| v.is_integral())
}

/// Check if a number needs more than `max_decimal_places` decimal places.
///
/// The value is rounded to that many places and compared with the
/// original; this does not ask whether the value is fractional.
/// `max_decimal_places` is required.
///
/// ```rust
/// use argguard::number::is_float;
///
/// assert_eq!(is_float(Some(&0.12), Some(2)), Ok(false));
/// assert_eq!(is_float(Some(&0.12), Some(1)), Ok(true));
/// assert_eq!(is_float(Some(&7), Some(0)), Ok(false));
/// assert!(is_float(Some(&0.12), None).is_err());
/// ```
pub fn is_float<N: Number>(value: Option<&N>, max_decimal_places: Option<usize>) -> Result<bool> {
    let places = required(max_decimal_places)?;
    Ok(value.is_some_and(|v| v.round_to(places) != *v))
}

/// Require a number to be greater than zero.
pub fn must_be_positive<N: Number>(value: Option<N>) -> Result<Option<N>> {
    let holds = is_positive(value.as_ref());
    must(value, holds, || "be positive".to_string())
}

/// Require a number not to be greater than zero.
pub fn cannot_be_positive<N: Number>(value: Option<N>) -> Result<Option<N>> {
    let holds = is_positive(value.as_ref());
    cannot(value, holds, || "be positive".to_string())
}

/// Require a number to be less than zero.
pub fn must_be_negative<N: Number>(value: Option<N>) -> Result<Option<N>> {
    let holds = is_negative(value.as_ref());
    must(value, holds, || "be negative".to_string())
}

/// Require a number not to be less than zero.
pub fn cannot_be_negative<N: Number>(value: Option<N>) -> Result<Option<N>> {
    let holds = is_negative(value.as_ref());
    cannot(value, holds, || "be negative".to_string())
}

/// Require a number not to be zero.
pub fn cannot_be_zero<N: Number>(value: Option<N>) -> Result<Option<N>> {
    let holds = is_zero(value.as_ref());
    cannot(value, holds, || "be zero".to_string())
}

/// Require a number to equal its nearest integer.
pub fn must_be_integer<N: Number>(value: Option<N>) -> Result<Option<N>> {
    let holds = is_integer(value.as_ref());
    must(value, holds, || "be an integer".to_string())
}

/// Require a number not to equal its nearest integer.
pub fn cannot_be_integer<N: Number>(value: Option<N>) -> Result<Option<N>> {
    let holds = is_integer(value.as_ref());
    cannot(value, holds, || "be an integer".to_string())
}

fn float_phrase(places: Option<usize>) -> String {
    match places {
        Some(places) => format!("be a float with more than {} decimal places", places),
        None => "be a float".to_string(),
    }
}

/// Require a number to need more than `max_decimal_places` decimal places.
pub fn must_be_float<N: Number>(
    value: Option<N>,
    max_decimal_places: Option<usize>,
) -> Result<Option<N>> {
    let holds = is_float(value.as_ref(), max_decimal_places)?;
    must(value, holds, || float_phrase(max_decimal_places))
}

/// Require a number to fit in `max_decimal_places` decimal places.
///
/// ```rust
/// use argguard::number::cannot_be_float;
///
/// assert_eq!(cannot_be_float(Some(19.99), Some(2)), Ok(Some(19.99)));
/// assert_eq!(
///     cannot_be_float(Some(19.999), Some(2)).unwrap_err().message(),
///     "Value cannot be a float with more than 2 decimal places."
/// );
/// ```
pub fn cannot_be_float<N: Number>(
    value: Option<N>,
    max_decimal_places: Option<usize>,
) -> Result<Option<N>> {
    let holds = is_float(value.as_ref(), max_decimal_places)?;
    cannot(value, holds, || float_phrase(max_decimal_places))
}

/// Return `default` if the number is greater than zero.
pub fn when_positive<N: Number>(value: Option<N>, default: Option<N>) -> Option<N> {
    let holds = is_positive(value.as_ref());
    when(value, holds, default)
}

/// Return `default` if the number is less than zero.
pub fn when_negative<N: Number>(value: Option<N>, default: Option<N>) -> Option<N> {
    let holds = is_negative(value.as_ref());
    when(value, holds, default)
}

/// Return `default` if the number is zero.
pub fn when_zero<N: Number>(value: Option<N>, default: Option<N>) -> Option<N> {
    let holds = is_zero(value.as_ref());
    when(value, holds, default)
}

/// Return `default` unless the number is zero.
pub fn when_not_zero<N: Number>(value: Option<N>, default: Option<N>) -> Option<N> {
    let holds = is_zero(value.as_ref());
    when_not(value, holds, default)
}

/// Return `default` if the number equals its nearest integer.
pub fn when_integer<N: Number>(value: Option<N>, default: Option<N>) -> Option<N> {
    let holds = is_integer(value.as_ref());
    when(value, holds, default)
}

/// Return `default` unless the number equals its nearest integer.
pub fn when_not_integer<N: Number>(value: Option<N>, default: Option<N>) -> Option<N> {
    let holds = is_integer(value.as_ref());
    when_not(value, holds, default)
}

/// Return `default` if the number needs more than `max_decimal_places`.
pub fn when_float<N: Number>(
    value: Option<N>,
    max_decimal_places: Option<usize>,
    default: Option<N>,
) -> Result<Option<N>> {
    let holds = is_float(value.as_ref(), max_decimal_places)?;
    Ok(when(value, holds, default))
}

/// Return `default` if the number fits in `max_decimal_places`.
pub fn when_not_float<N: Number>(
    value: Option<N>,
    max_decimal_places: Option<usize>,
    default: Option<N>,
) -> Result<Option<N>> {
    let holds = is_float(value.as_ref(), max_decimal_places)?;
    Ok(when_not(value, holds, default))
}
