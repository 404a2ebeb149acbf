//! String checks
//!
//! Strings have three "empty-like" states, checked in this order by the
//! composite guards:
//!
//! 1. absent (`None`)
//! 2. empty (`Some("")`)
//! 3. blank (`Some("  \t")`: non-empty, whitespace only)
//!
//! Guards accept any `AsRef<str>` candidate (`&str`, `String`, ...) and hand
//! it back unchanged. Ordered comparisons are re-exported from
//! [`compare`](crate::compare) and are lexicographic.
//!
//! # Example
//!
//! ```rust
//! use argguard::string;
//!
//! let name = string::cannot_be_null_or_blank(Some("alice")).unwrap();
//! assert_eq!(name, Some("alice"));
//!
//! let err = string::cannot_be_null_or_blank(Some("   ")).unwrap_err();
//! assert_eq!(err.message(), "Value cannot be blank.");
//!
//! assert_eq!(string::when_null_or_blank(Some(" "), Some("n/a")), Some("n/a"));
//! ```

use std::fmt::Display;

use regex::Regex;

pub use crate::compare::*;
use crate::error::{required, Result};
use crate::guard::{cannot, must, when, when_not};
use crate::object;
use crate::render;

fn text<S: AsRef<str>>(value: &Option<S>) -> Option<&str> {
    value.as_ref().map(|s| s.as_ref())
}

/// Check if a string is present and empty.
///
/// ```rust
/// use argguard::string::is_empty;
///
/// assert!(is_empty(Some("")));
/// assert!(!is_empty(Some(" ")));
/// assert!(!is_empty(None));
/// ```
#[inline]
pub fn is_empty(value: Option<&str>) -> bool {
    value.is_some_and(str::is_empty)
}

/// Check if a string is absent or empty.
pub fn is_null_or_empty(value: Option<&str>) -> bool {
    object::is_null(value) || is_empty(value)
}

/// Check if a string is present, non-empty and made only of whitespace.
///
/// ```rust
/// use argguard::string::is_blank;
///
/// assert!(is_blank(Some(" \t\n")));
/// assert!(!is_blank(Some("")));
/// assert!(!is_blank(Some(" a ")));
/// assert!(!is_blank(None));
/// ```
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty() && s.chars().all(char::is_whitespace))
}

/// Check if a string is absent, empty or blank.
pub fn is_null_or_blank(value: Option<&str>) -> bool {
    is_null_or_empty(value) || is_blank(value)
}

/// Check if a string contains `substring`.
///
/// `substring` is required; an absent string contains nothing.
pub fn does_contain(value: Option<&str>, substring: Option<&str>) -> Result<bool> {
    let substring = required(substring)?;
    Ok(value.is_some_and(|s| s.contains(substring)))
}

/// Check if a string starts with `prefix`.
pub fn does_start_with(value: Option<&str>, prefix: Option<&str>) -> Result<bool> {
    let prefix = required(prefix)?;
    Ok(value.is_some_and(|s| s.starts_with(prefix)))
}

/// Check if a string ends with `suffix`.
pub fn does_end_with(value: Option<&str>, suffix: Option<&str>) -> Result<bool> {
    let suffix = required(suffix)?;
    Ok(value.is_some_and(|s| s.ends_with(suffix)))
}

/// Check if a string matches `pattern`.
///
/// ```rust
/// use argguard::string::is_match;
/// use regex::Regex;
///
/// let digits = Regex::new(r"^\d+$").unwrap();
/// assert_eq!(is_match(Some("123"), Some(&digits)), Ok(true));
/// assert_eq!(is_match(Some("12a"), Some(&digits)), Ok(false));
/// assert_eq!(is_match(None, Some(&digits)), Ok(false));
/// assert!(is_match(Some("123"), None).is_err());
/// ```
pub fn is_match(value: Option<&str>, pattern: Option<&Regex>) -> Result<bool> {
    let pattern = required(pattern)?;
    Ok(value.is_some_and(|s| pattern.is_match(s)))
}

/// Check if a string is one of `values`.
pub fn is_one_of<T: AsRef<str>>(value: Option<&str>, values: Option<&[T]>) -> Result<bool> {
    let values = required(values)?;
    Ok(value.is_some_and(|s| values.iter().any(|v| v.as_ref() == s)))
}

/// Require a string not to be empty. An absent string passes.
pub fn cannot_be_empty<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    let holds = is_empty(text(&value));
    cannot(value, holds, || "be empty".to_string())
}

/// Require a string to be empty.
pub fn must_be_empty<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    let holds = is_empty(text(&value));
    must(value, holds, || "be empty".to_string())
}

/// Require a string to be neither absent nor empty.
///
/// The absence check runs first, so `None` reports
/// `"Value cannot be null."`.
pub fn cannot_be_null_or_empty<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    let value = object::cannot_be_null(value)?;
    cannot_be_empty(Some(value))
}

/// Require a string not to be blank. Absent and empty strings pass.
pub fn cannot_be_blank<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    let holds = is_blank(text(&value));
    cannot(value, holds, || "be blank".to_string())
}

/// Require a string to be neither absent, empty nor blank.
///
/// ```rust
/// use argguard::string::cannot_be_null_or_blank;
///
/// assert_eq!(cannot_be_null_or_blank::<&str>(None).unwrap_err().message(), "Value cannot be null.");
/// assert_eq!(cannot_be_null_or_blank(Some("")).unwrap_err().message(), "Value cannot be empty.");
/// assert_eq!(cannot_be_null_or_blank(Some(" ")).unwrap_err().message(), "Value cannot be blank.");
/// ```
pub fn cannot_be_null_or_blank<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    let value = cannot_be_null_or_empty(value)?;
    cannot_be_blank(value)
}

fn contain_phrase(verb: &str, argument: Option<&str>) -> String {
    format!("{} {}", verb, render::scalar(argument))
}

/// Require a string to contain `substring`.
pub fn must_contain<S: AsRef<str>>(value: Option<S>, substring: Option<&str>) -> Result<Option<S>> {
    let holds = does_contain(text(&value), substring)?;
    must(value, holds, || contain_phrase("contain", substring))
}

/// Require a string not to contain `substring`.
pub fn cannot_contain<S: AsRef<str>>(
    value: Option<S>,
    substring: Option<&str>,
) -> Result<Option<S>> {
    let holds = does_contain(text(&value), substring)?;
    cannot(value, holds, || contain_phrase("contain", substring))
}

/// Require a string to start with `prefix`.
pub fn must_start_with<S: AsRef<str>>(value: Option<S>, prefix: Option<&str>) -> Result<Option<S>> {
    let holds = does_start_with(text(&value), prefix)?;
    must(value, holds, || contain_phrase("start with", prefix))
}

/// Require a string not to start with `prefix`.
pub fn cannot_start_with<S: AsRef<str>>(
    value: Option<S>,
    prefix: Option<&str>,
) -> Result<Option<S>> {
    let holds = does_start_with(text(&value), prefix)?;
    cannot(value, holds, || contain_phrase("start with", prefix))
}

/// Require a string to end with `suffix`.
pub fn must_end_with<S: AsRef<str>>(value: Option<S>, suffix: Option<&str>) -> Result<Option<S>> {
    let holds = does_end_with(text(&value), suffix)?;
    must(value, holds, || contain_phrase("end with", suffix))
}

/// Require a string not to end with `suffix`.
pub fn cannot_end_with<S: AsRef<str>>(value: Option<S>, suffix: Option<&str>) -> Result<Option<S>> {
    let holds = does_end_with(text(&value), suffix)?;
    cannot(value, holds, || contain_phrase("end with", suffix))
}

/// Require a string to match `pattern`.
pub fn must_match<S: AsRef<str>>(value: Option<S>, pattern: Option<&Regex>) -> Result<Option<S>> {
    let holds = is_match(text(&value), pattern)?;
    must(value, holds, || format!("match {}", render::scalar(pattern)))
}

/// Require a string not to match `pattern`.
pub fn cannot_match<S: AsRef<str>>(value: Option<S>, pattern: Option<&Regex>) -> Result<Option<S>> {
    let holds = is_match(text(&value), pattern)?;
    cannot(value, holds, || format!("match {}", render::scalar(pattern)))
}

/// Require a string to be one of `values`.
pub fn must_be_one_of<S, T>(value: Option<S>, values: Option<&[T]>) -> Result<Option<S>>
where
    S: AsRef<str>,
    T: AsRef<str> + Display,
{
    let holds = is_one_of(text(&value), values)?;
    must(value, holds, || format!("be one of {}", render::list(values)))
}

/// Require a string to be none of `values`.
pub fn cannot_be_one_of<S, T>(value: Option<S>, values: Option<&[T]>) -> Result<Option<S>>
where
    S: AsRef<str>,
    T: AsRef<str> + Display,
{
    let holds = is_one_of(text(&value), values)?;
    cannot(value, holds, || format!("be one of {}", render::list(values)))
}

/// Return `default` if the string is empty.
pub fn when_empty<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Option<S> {
    let holds = is_empty(text(&value));
    when(value, holds, default)
}

/// Return `default` unless the string is empty.
pub fn when_not_empty<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Option<S> {
    let holds = is_empty(text(&value));
    when_not(value, holds, default)
}

/// Return `default` if the string is absent or empty.
pub fn when_null_or_empty<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Option<S> {
    let holds = is_null_or_empty(text(&value));
    when(value, holds, default)
}

/// Return `default` if the string is blank.
pub fn when_blank<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Option<S> {
    let holds = is_blank(text(&value));
    when(value, holds, default)
}

/// Return `default` if the string is absent, empty or blank.
pub fn when_null_or_blank<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Option<S> {
    let holds = is_null_or_blank(text(&value));
    when(value, holds, default)
}

/// Return `default` if the string contains `substring`.
pub fn when_contains<S: AsRef<str>>(
    value: Option<S>,
    substring: Option<&str>,
    default: Option<S>,
) -> Result<Option<S>> {
    let holds = does_contain(text(&value), substring)?;
    Ok(when(value, holds, default))
}

/// Return `default` unless the string contains `substring`.
pub fn when_not_contains<S: AsRef<str>>(
    value: Option<S>,
    substring: Option<&str>,
    default: Option<S>,
) -> Result<Option<S>> {
    let holds = does_contain(text(&value), substring)?;
    Ok(when_not(value, holds, default))
}

/// Return `default` if the string matches `pattern`.
pub fn when_match<S: AsRef<str>>(
    value: Option<S>,
    pattern: Option<&Regex>,
    default: Option<S>,
) -> Result<Option<S>> {
    let holds = is_match(text(&value), pattern)?;
    Ok(when(value, holds, default))
}

/// Return `default` unless the string matches `pattern`.
pub fn when_not_match<S: AsRef<str>>(
    value: Option<S>,
    pattern: Option<&Regex>,
    default: Option<S>,
) -> Result<Option<S>> {
    let holds = is_match(text(&value), pattern)?;
    Ok(when_not(value, holds, default))
}

/// Return `default` if the string is one of `values`.
pub fn when_one_of<S, T>(
    value: Option<S>,
    values: Option<&[T]>,
    default: Option<S>,
) -> Result<Option<S>>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let holds = is_one_of(text(&value), values)?;
    Ok(when(value, holds, default))
}

/// Return `default` unless the string is one of `values`.
pub fn when_not_one_of<S, T>(
    value: Option<S>,
    values: Option<&[T]>,
    default: Option<S>,
) -> Result<Option<S>>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let holds = is_one_of(text(&value), values)?;
    Ok(when_not(value, holds, default))
}
