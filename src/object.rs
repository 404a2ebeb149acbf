//! Generic-object checks
//!
//! The primitives every other domain builds on: absence, equality,
//! membership in a candidate set, and caller-defined type tags.
//!
//! An absent value is `None`. Empty strings and empty slices are present
//! values and are never absent.
//!
//! # Example
//!
//! ```rust
//! use argguard::object;
//!
//! let name = object::cannot_be_null(Some("alice")).unwrap();
//! assert_eq!(name, "alice");
//!
//! assert!(object::is_equal_to::<i32>(None, None));
//! assert_eq!(object::when_null(None, 8080), 8080);
//! ```

use std::borrow::Borrow;
use std::fmt::Display;

use crate::error::{required, Result, NULL_MESSAGE};
use crate::guard::{self, cannot, must, when, when_not};
use crate::render;

/// A value that can report a type tag.
///
/// Implement this instead of relying on runtime reflection. `kind` names the
/// value's own type; override `is_kind_of` to also accept ancestor kinds.
///
/// # Example
///
/// ```rust
/// use argguard::object::{self, Typed};
///
/// enum Animal {
///     Dog,
///     Cat,
/// }
///
/// impl Typed for Animal {
///     type Kind = &'static str;
///
///     fn kind(&self) -> &'static str {
///         match self {
///             Animal::Dog => "dog",
///             Animal::Cat => "cat",
///         }
///     }
///
///     fn is_kind_of(&self, kind: &&'static str) -> bool {
///         *kind == "animal" || self.kind() == *kind
///     }
/// }
///
/// assert_eq!(object::is_type_of(Some(&Animal::Dog), Some(&"dog")), Ok(true));
/// assert_eq!(object::is_type_of(Some(&Animal::Cat), Some(&"animal")), Ok(false));
/// assert_eq!(object::is_sub_type_of(Some(&Animal::Cat), Some(&"animal")), Ok(true));
/// ```
pub trait Typed {
    /// The tag type.
    type Kind: PartialEq + Display;

    /// The tag of this value's own type.
    fn kind(&self) -> Self::Kind;

    /// Whether this value is of `kind` or of a kind derived from it.
    fn is_kind_of(&self, kind: &Self::Kind) -> bool {
        self.kind() == *kind
    }
}

/// Borrow the candidate held by an owned option.
pub(crate) fn peek<V, T>(value: &Option<V>) -> Option<&T>
where
    V: Borrow<T>,
    T: ?Sized,
{
    value.as_ref().map(|v| v.borrow())
}

/// Check if a value is absent.
#[inline]
pub fn is_absent<T: ?Sized>(value: Option<&T>) -> bool {
    value.is_none()
}

/// Check if a value is null (absent).
///
/// ```rust
/// use argguard::object::is_null;
///
/// assert!(is_null::<i32>(None));
/// assert!(!is_null(Some("")));
/// ```
#[inline]
pub fn is_null<T: ?Sized>(value: Option<&T>) -> bool {
    is_absent(value)
}

/// Check if two values are equal. Two absent values are equal.
///
/// ```rust
/// use argguard::object::is_equal_to;
///
/// assert!(is_equal_to(Some(&1), Some(&1)));
/// assert!(!is_equal_to(Some(&1), None));
/// assert!(is_equal_to::<str>(None, None));
/// ```
pub fn is_equal_to<T: PartialEq + ?Sized>(value: Option<&T>, other: Option<&T>) -> bool {
    value == other
}

/// Check if a value is one of `values`.
///
/// `values` is required. An absent value is never one of them.
///
/// ```rust
/// use argguard::object::is_one_of;
///
/// assert_eq!(is_one_of(Some(&2), Some(&[1, 2, 3][..])), Ok(true));
/// assert_eq!(is_one_of(None, Some(&[1, 2, 3][..])), Ok(false));
/// assert!(is_one_of(Some(&2), None).is_err());
/// ```
pub fn is_one_of<T: PartialEq>(value: Option<&T>, values: Option<&[T]>) -> Result<bool> {
    let values = required(values)?;
    Ok(value.is_some_and(|v| values.contains(v)))
}

/// Check if a value's kind is exactly `kind`.
pub fn is_type_of<T: Typed + ?Sized>(value: Option<&T>, kind: Option<&T::Kind>) -> Result<bool> {
    let kind = required(kind)?;
    Ok(value.is_some_and(|v| v.kind() == *kind))
}

/// Check if a value is of `kind` or of a kind derived from it.
pub fn is_sub_type_of<T: Typed + ?Sized>(
    value: Option<&T>,
    kind: Option<&T::Kind>,
) -> Result<bool> {
    let kind = required(kind)?;
    Ok(value.is_some_and(|v| v.is_kind_of(kind)))
}

/// Require a value to be present, returning it unwrapped.
///
/// ```rust
/// use argguard::object::cannot_be_null;
///
/// assert_eq!(cannot_be_null(Some(3)), Ok(3));
/// assert_eq!(
///     cannot_be_null::<i32>(None).unwrap_err().message(),
///     "Value cannot be null."
/// );
/// ```
pub fn cannot_be_null<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| guard::fail(NULL_MESSAGE.to_string()))
}

/// Require a value to be absent.
pub fn must_be_null<T>(value: Option<T>) -> Result<Option<T>> {
    let holds = value.is_none();
    must(value, holds, || "be null".to_string())
}

/// Require a value to differ from `other`.
pub fn cannot_be_equal_to<V, T>(value: Option<V>, other: Option<&T>) -> Result<Option<V>>
where
    V: Borrow<T>,
    T: PartialEq + Display + ?Sized,
{
    let holds = is_equal_to(peek(&value), other);
    cannot(value, holds, || format!("be equal to {}", render::scalar(other)))
}

/// Require a value to equal `other`.
pub fn must_be_equal_to<V, T>(value: Option<V>, other: Option<&T>) -> Result<Option<V>>
where
    V: Borrow<T>,
    T: PartialEq + Display + ?Sized,
{
    let holds = is_equal_to(peek(&value), other);
    must(value, holds, || format!("be equal to {}", render::scalar(other)))
}

/// Require a value to be none of `values`.
pub fn cannot_be_one_of<V, T>(value: Option<V>, values: Option<&[T]>) -> Result<Option<V>>
where
    V: Borrow<T>,
    T: PartialEq + Display,
{
    let holds = is_one_of(peek(&value), values)?;
    cannot(value, holds, || format!("be one of {}", render::list(values)))
}

/// Require a value to be one of `values`.
pub fn must_be_one_of<V, T>(value: Option<V>, values: Option<&[T]>) -> Result<Option<V>>
where
    V: Borrow<T>,
    T: PartialEq + Display,
{
    let holds = is_one_of(peek(&value), values)?;
    must(value, holds, || format!("be one of {}", render::list(values)))
}

/// Require a value's kind to be exactly `kind`.
pub fn must_be_type_of<T: Typed>(value: Option<T>, kind: Option<&T::Kind>) -> Result<Option<T>> {
    let holds = is_type_of(value.as_ref(), kind)?;
    must(value, holds, || format!("be of type {}", render::scalar(kind)))
}

/// Require a value's kind to differ from `kind`.
pub fn cannot_be_type_of<T: Typed>(value: Option<T>, kind: Option<&T::Kind>) -> Result<Option<T>> {
    let holds = is_type_of(value.as_ref(), kind)?;
    cannot(value, holds, || format!("be of type {}", render::scalar(kind)))
}

/// Require a value to be of `kind` or a kind derived from it.
pub fn must_be_sub_type_of<T: Typed>(
    value: Option<T>,
    kind: Option<&T::Kind>,
) -> Result<Option<T>> {
    let holds = is_sub_type_of(value.as_ref(), kind)?;
    must(value, holds, || {
        format!("be a sub type of {}", render::scalar(kind))
    })
}

/// Require a value to be neither of `kind` nor of a kind derived from it.
pub fn cannot_be_sub_type_of<T: Typed>(
    value: Option<T>,
    kind: Option<&T::Kind>,
) -> Result<Option<T>> {
    let holds = is_sub_type_of(value.as_ref(), kind)?;
    cannot(value, holds, || {
        format!("be a sub type of {}", render::scalar(kind))
    })
}

/// Return `default` if the value is absent, else the value.
#[inline]
pub fn when_null<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Return `default` if the value is present, else the (absent) value.
pub fn when_not_null<T>(value: Option<T>, default: Option<T>) -> Option<T> {
    let holds = value.is_none();
    when_not(value, holds, default)
}

/// Return `default` if the value equals `other`.
pub fn when_equal_to<V, T>(value: Option<V>, other: Option<&T>, default: Option<V>) -> Option<V>
where
    V: Borrow<T>,
    T: PartialEq + ?Sized,
{
    let holds = is_equal_to(peek(&value), other);
    when(value, holds, default)
}

/// Return `default` if the value differs from `other`.
pub fn when_not_equal_to<V, T>(
    value: Option<V>,
    other: Option<&T>,
    default: Option<V>,
) -> Option<V>
where
    V: Borrow<T>,
    T: PartialEq + ?Sized,
{
    let holds = is_equal_to(peek(&value), other);
    when_not(value, holds, default)
}

/// Return `default` if the value is one of `values`.
pub fn when_one_of<V, T>(
    value: Option<V>,
    values: Option<&[T]>,
    default: Option<V>,
) -> Result<Option<V>>
where
    V: Borrow<T>,
    T: PartialEq,
{
    let holds = is_one_of(peek(&value), values)?;
    Ok(when(value, holds, default))
}

/// Return `default` if the value is none of `values`.
pub fn when_not_one_of<V, T>(
    value: Option<V>,
    values: Option<&[T]>,
    default: Option<V>,
) -> Result<Option<V>>
where
    V: Borrow<T>,
    T: PartialEq,
{
    let holds = is_one_of(peek(&value), values)?;
    Ok(when_not(value, holds, default))
}

/// Return `default` if the value's kind is exactly `kind`.
pub fn when_type_of<T: Typed>(
    value: Option<T>,
    kind: Option<&T::Kind>,
    default: Option<T>,
) -> Result<Option<T>> {
    let holds = is_type_of(value.as_ref(), kind)?;
    Ok(when(value, holds, default))
}

/// Return `default` if the value's kind is not `kind`.
pub fn when_not_type_of<T: Typed>(
    value: Option<T>,
    kind: Option<&T::Kind>,
    default: Option<T>,
) -> Result<Option<T>> {
    let holds = is_type_of(value.as_ref(), kind)?;
    Ok(when_not(value, holds, default))
}
