//! Ordered comparisons shared by the number and string domains
//!
//! Every comparison is restricted to [`Ordered`] types (primitive numbers,
//! `char`, `str` and `String`) and uses their native ordering: numeric for
//! numbers, lexicographic for strings.
//!
//! The bound is required; an absent candidate compares as `false`.
//!
//! # Example
//!
//! ```rust
//! use argguard::compare::*;
//!
//! assert_eq!(is_greater_than(Some(&5), Some(&3)), Ok(true));
//! assert_eq!(is_greater_than(None, Some(&3)), Ok(false));
//! assert!(is_greater_than(Some(&5), None).is_err());
//!
//! assert_eq!(is_less_than(Some("apple"), Some("banana")), Ok(true));
//! assert_eq!(must_be_between(Some(2), Some(&1), Some(&3), true), Ok(Some(2)));
//! ```

use std::borrow::Borrow;
use std::fmt::Display;

use crate::error::{required, Result};
use crate::guard::{cannot, must, when, when_not};
use crate::object::peek;
use crate::render;

/// A type with a native total-enough ordering that can be compared and
/// rendered in guard messages.
pub trait Ordered: PartialOrd + Display {}

macro_rules! impl_ordered {
    ($($ty:ty),+ $(,)?) => {
        $(impl Ordered for $ty {})+
    };
}

impl_ordered!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, str, String,
);

// One relational family: predicate, two guards, two substitutions.
macro_rules! relational {
    (
        $op:tt, $phrase:literal,
        $is:ident, $must:ident, $cannot:ident, $when:ident, $when_not:ident
    ) => {
        #[doc = concat!("Check if a value is ", $phrase, " `bound`.")]
        pub fn $is<T: Ordered + ?Sized>(value: Option<&T>, bound: Option<&T>) -> Result<bool> {
            let bound = required(bound)?;
            Ok(value.is_some_and(|v| v $op bound))
        }

        #[doc = concat!("Require a value to be ", $phrase, " `bound`.")]
        pub fn $must<V, T>(value: Option<V>, bound: Option<&T>) -> Result<Option<V>>
        where
            V: Borrow<T>,
            T: Ordered + ?Sized,
        {
            let holds = $is(peek(&value), bound)?;
            must(value, holds, || {
                format!(concat!("be ", $phrase, " {}"), render::scalar(bound))
            })
        }

        #[doc = concat!("Require a value not to be ", $phrase, " `bound`.")]
        pub fn $cannot<V, T>(value: Option<V>, bound: Option<&T>) -> Result<Option<V>>
        where
            V: Borrow<T>,
            T: Ordered + ?Sized,
        {
            let holds = $is(peek(&value), bound)?;
            cannot(value, holds, || {
                format!(concat!("be ", $phrase, " {}"), render::scalar(bound))
            })
        }

        #[doc = concat!("Return `default` if the value is ", $phrase, " `bound`.")]
        pub fn $when<V, T>(value: Option<V>, bound: Option<&T>, default: Option<V>) -> Result<Option<V>>
        where
            V: Borrow<T>,
            T: Ordered + ?Sized,
        {
            let holds = $is(peek(&value), bound)?;
            Ok(when(value, holds, default))
        }

        #[doc = concat!("Return `default` unless the value is ", $phrase, " `bound`.")]
        pub fn $when_not<V, T>(
            value: Option<V>,
            bound: Option<&T>,
            default: Option<V>,
        ) -> Result<Option<V>>
        where
            V: Borrow<T>,
            T: Ordered + ?Sized,
        {
            let holds = $is(peek(&value), bound)?;
            Ok(when_not(value, holds, default))
        }
    };
}

relational!(
    >, "greater than",
    is_greater_than, must_be_greater_than, cannot_be_greater_than,
    when_greater_than, when_not_greater_than
);

relational!(
    >=, "greater than or equal to",
    is_greater_than_or_equal_to, must_be_greater_than_or_equal_to,
    cannot_be_greater_than_or_equal_to, when_greater_than_or_equal_to,
    when_not_greater_than_or_equal_to
);

relational!(
    <, "less than",
    is_less_than, must_be_less_than, cannot_be_less_than,
    when_less_than, when_not_less_than
);

relational!(
    <=, "less than or equal to",
    is_less_than_or_equal_to, must_be_less_than_or_equal_to,
    cannot_be_less_than_or_equal_to, when_less_than_or_equal_to,
    when_not_less_than_or_equal_to
);

/// Check if a value lies between `min` and `max`.
///
/// Both bounds are required and `min` must not exceed `max`; a reversed
/// range fails with the message of [`must_be_less_than_or_equal_to`].
/// With `inclusive` the bounds themselves count as inside the range.
///
/// ```rust
/// use argguard::compare::is_between;
///
/// assert_eq!(is_between(Some(&1), Some(&1), Some(&3), true), Ok(true));
/// assert_eq!(is_between(Some(&1), Some(&1), Some(&3), false), Ok(false));
/// assert!(is_between(Some(&1), Some(&3), Some(&1), true).is_err());
/// ```
pub fn is_between<T: Ordered + ?Sized>(
    value: Option<&T>,
    min: Option<&T>,
    max: Option<&T>,
    inclusive: bool,
) -> Result<bool> {
    let min = required(min)?;
    let max = required(max)?;
    must_be_less_than_or_equal_to(Some(min), Some(max))?;
    Ok(value.is_some_and(|v| {
        if inclusive {
            v >= min && v <= max
        } else {
            v > min && v < max
        }
    }))
}

fn between_phrase<T: Display + ?Sized>(min: Option<&T>, max: Option<&T>, inclusive: bool) -> String {
    format!(
        "be between {} and {} {}",
        render::scalar(min),
        render::scalar(max),
        if inclusive { "inclusive" } else { "exclusive" }
    )
}

/// Require a value to lie between `min` and `max`.
///
/// ```rust
/// use argguard::compare::must_be_between;
///
/// assert_eq!(must_be_between(Some(2), Some(&1), Some(&3), true), Ok(Some(2)));
/// assert_eq!(
///     must_be_between(Some(4), Some(&1), Some(&3), true).unwrap_err().message(),
///     "Value must be between 1 and 3 inclusive."
/// );
/// ```
pub fn must_be_between<V, T>(
    value: Option<V>,
    min: Option<&T>,
    max: Option<&T>,
    inclusive: bool,
) -> Result<Option<V>>
where
    V: Borrow<T>,
    T: Ordered + ?Sized,
{
    let holds = is_between(peek(&value), min, max, inclusive)?;
    must(value, holds, || between_phrase(min, max, inclusive))
}

/// Require a value to lie outside `min` and `max`.
pub fn cannot_be_between<V, T>(
    value: Option<V>,
    min: Option<&T>,
    max: Option<&T>,
    inclusive: bool,
) -> Result<Option<V>>
where
    V: Borrow<T>,
    T: Ordered + ?Sized,
{
    let holds = is_between(peek(&value), min, max, inclusive)?;
    cannot(value, holds, || between_phrase(min, max, inclusive))
}

/// Return `default` if the value lies between `min` and `max`.
pub fn when_between<V, T>(
    value: Option<V>,
    min: Option<&T>,
    max: Option<&T>,
    inclusive: bool,
    default: Option<V>,
) -> Result<Option<V>>
where
    V: Borrow<T>,
    T: Ordered + ?Sized,
{
    let holds = is_between(peek(&value), min, max, inclusive)?;
    Ok(when(value, holds, default))
}

/// Return `default` if the value lies outside `min` and `max`.
pub fn when_not_between<V, T>(
    value: Option<V>,
    min: Option<&T>,
    max: Option<&T>,
    inclusive: bool,
    default: Option<V>,
) -> Result<Option<V>>
where
    V: Borrow<T>,
    T: Ordered + ?Sized,
{
    let holds = is_between(peek(&value), min, max, inclusive)?;
    Ok(when_not(value, holds, default))
}
