//! The guard and substitution plumbing shared by every domain
//!
//! Each domain module pairs its predicates with guards and substitutions
//! built from the four functions here:
//!
//! - [`must`]: fail unless the predicate held
//! - [`cannot`]: fail if the predicate held
//! - [`when`]: swap in the default if the predicate held
//! - [`when_not`]: swap in the default unless the predicate held
//!
//! Guards hand back the value they were given, so they can be chained
//! inline:
//!
//! ```rust
//! use argguard::guard::{cannot, must};
//!
//! let port = 8080;
//! let port = must(port, port > 0, || "be positive".to_string())
//!     .and_then(|p| cannot(p, p == 22, || "be equal to 22".to_string()))
//!     .unwrap();
//! assert_eq!(port, 8080);
//! ```
//!
//! The message is only built when the guard fails.

use crate::error::{ArgumentError, Result};

/// Build the guard failure for `message`.
pub(crate) fn fail(message: String) -> ArgumentError {
    #[cfg(feature = "tracing")]
    tracing::debug!(message = %message, "guard failed");
    ArgumentError::new(message)
}

/// Return `value` if `holds`, else fail with `"Value must {condition}."`.
///
/// # Example
///
/// ```rust
/// use argguard::guard::must;
///
/// assert_eq!(must(5, true, || "be odd".to_string()), Ok(5));
///
/// let err = must(4, false, || "be odd".to_string()).unwrap_err();
/// assert_eq!(err.message(), "Value must be odd.");
/// ```
pub fn must<T, F>(value: T, holds: bool, condition: F) -> Result<T>
where
    F: FnOnce() -> String,
{
    if holds {
        Ok(value)
    } else {
        Err(fail(format!("Value must {}.", condition())))
    }
}

/// Return `value` unless `holds`, else fail with `"Value cannot {condition}."`.
///
/// # Example
///
/// ```rust
/// use argguard::guard::cannot;
///
/// assert_eq!(cannot(5, false, || "be even".to_string()), Ok(5));
///
/// let err = cannot(4, true, || "be even".to_string()).unwrap_err();
/// assert_eq!(err.message(), "Value cannot be even.");
/// ```
pub fn cannot<T, F>(value: T, holds: bool, condition: F) -> Result<T>
where
    F: FnOnce() -> String,
{
    if holds {
        Err(fail(format!("Value cannot {}.", condition())))
    } else {
        Ok(value)
    }
}

/// Return `default` if `holds`, else `value`.
///
/// # Example
///
/// ```rust
/// use argguard::guard::when;
///
/// assert_eq!(when(0, true, 10), 10);
/// assert_eq!(when(3, false, 10), 3);
/// ```
#[inline]
pub fn when<T>(value: T, holds: bool, default: T) -> T {
    if holds {
        default
    } else {
        value
    }
}

/// Return `default` unless `holds`, else `value`.
///
/// # Example
///
/// ```rust
/// use argguard::guard::when_not;
///
/// assert_eq!(when_not(0, false, 10), 10);
/// assert_eq!(when_not(3, true, 10), 3);
/// ```
#[inline]
pub fn when_not<T>(value: T, holds: bool, default: T) -> T {
    when(value, !holds, default)
}
