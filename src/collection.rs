//! Collection checks
//!
//! Predicates take the candidate as `Option<&[T]>`; guards and
//! substitutions accept any `AsRef<[T]>` (`Vec<T>`, arrays, slices) and hand
//! it back unchanged.
//!
//! An absent collection contains nothing, has no duplicates and is not
//! empty; it is only "null or empty". Elements that may themselves be
//! absent are modelled as `Option<T>` items.
//!
//! # Example
//!
//! ```rust
//! use argguard::collection;
//!
//! let ids = collection::cannot_contain_duplicates(Some(vec![1, 2, 3])).unwrap();
//! assert_eq!(ids, Some(vec![1, 2, 3]));
//!
//! let fallback = collection::when_is_null_or_empty_array(Some(vec![]), Some(vec![9]));
//! assert_eq!(fallback, Some(vec![9]));
//! ```

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{required, Result};
use crate::guard::{cannot, must, when, when_not};
use crate::object;
use crate::predicate::Predicate;
use crate::render;

fn items<C, T>(value: &Option<C>) -> Option<&[T]>
where
    C: AsRef<[T]>,
{
    value.as_ref().map(|c| c.as_ref())
}

/// Check if a collection is present and has no elements.
///
/// ```rust
/// use argguard::collection::is_empty_array;
///
/// assert!(is_empty_array::<i32>(Some(&[][..])));
/// assert!(!is_empty_array(Some(&[1][..])));
/// assert!(!is_empty_array::<i32>(None));
/// ```
pub fn is_empty_array<T>(value: Option<&[T]>) -> bool {
    value.is_some_and(<[T]>::is_empty)
}

/// Check if a collection is absent or has no elements.
pub fn is_null_or_empty_array<T>(value: Option<&[T]>) -> bool {
    object::is_null(value) || is_empty_array(value)
}

/// Check if a collection contains `item`.
///
/// `item` is required; an absent collection contains nothing.
pub fn contains<T: PartialEq>(value: Option<&[T]>, item: Option<&T>) -> Result<bool> {
    let item = required(item)?;
    Ok(value.is_some_and(|v| v.contains(item)))
}

/// Check if a collection contains every one of `items`.
///
/// ```rust
/// use argguard::collection::contains_all;
///
/// let v = [1, 2, 3];
/// assert_eq!(contains_all(Some(&v[..]), Some(&[1, 3][..])), Ok(true));
/// assert_eq!(contains_all(Some(&v[..]), Some(&[1, 4][..])), Ok(false));
/// assert_eq!(contains_all(None, Some(&[1][..])), Ok(false));
/// ```
pub fn contains_all<T: PartialEq>(value: Option<&[T]>, items: Option<&[T]>) -> Result<bool> {
    let items = required(items)?;
    Ok(value.is_some_and(|v| items.iter().all(|item| v.contains(item))))
}

/// Check if a collection contains at least one of `items`.
pub fn contains_any<T: PartialEq>(value: Option<&[T]>, items: Option<&[T]>) -> Result<bool> {
    let items = required(items)?;
    Ok(value.is_some_and(|v| items.iter().any(|item| v.contains(item))))
}

/// Check if any element satisfies `selector`.
///
/// ```rust
/// use argguard::collection::contains_matching;
///
/// let v = [1, 2, 3];
/// assert_eq!(contains_matching(Some(&v[..]), Some(|n: &i32| *n > 2)), Ok(true));
/// assert!(contains_matching(Some(&v[..]), None::<fn(&i32) -> bool>).is_err());
/// ```
pub fn contains_matching<T, P>(value: Option<&[T]>, selector: Option<P>) -> Result<bool>
where
    P: Predicate<T>,
{
    let selector = required(selector)?;
    Ok(value.is_some_and(|v| v.iter().any(|item| selector.check(item))))
}

/// Check if a collection is non-empty and every element satisfies `selector`.
pub fn contains_only_matching<T, P>(value: Option<&[T]>, selector: Option<P>) -> Result<bool>
where
    P: Predicate<T>,
{
    let selector = required(selector)?;
    Ok(value.is_some_and(|v| !v.is_empty() && v.iter().all(|item| selector.check(item))))
}

/// Check if any element occurs more than once.
///
/// Scans once and stops at the first repeated element.
///
/// ```rust
/// use argguard::collection::contains_duplicates;
///
/// assert!(contains_duplicates(Some(&["x", "y", "z", "y"][..])));
/// assert!(!contains_duplicates(Some(&["x", "y", "z"][..])));
/// assert!(!contains_duplicates::<i32>(None));
/// ```
pub fn contains_duplicates<T: Eq + Hash>(value: Option<&[T]>) -> bool {
    value.is_some_and(|v| {
        let mut seen = HashSet::with_capacity(v.len());
        v.iter().any(|item| !seen.insert(item))
    })
}

/// Check if at least one element is absent.
pub fn contains_null<T>(value: Option<&[Option<T>]>) -> bool {
    value.is_some_and(|v| v.iter().any(Option::is_none))
}

/// Check if a collection is non-empty and every element is absent.
///
/// ```rust
/// use argguard::collection::contains_only_null;
///
/// assert!(contains_only_null::<i32>(Some(&[None, None][..])));
/// assert!(!contains_only_null(Some(&[None, Some(1)][..])));
/// assert!(!contains_only_null::<i32>(Some(&[][..])));
/// ```
pub fn contains_only_null<T>(value: Option<&[Option<T>]>) -> bool {
    value.is_some_and(|v| !v.is_empty() && v.iter().all(Option::is_none))
}

/// Check if two collections are equal.
///
/// Two absent collections are equal. Without `ignore_order` elements are
/// compared by position. With `ignore_order` each side only has to contain
/// every element of the other, so multiplicity is not compared:
/// `[1, 1, 2]` equals `[1, 2, 2]`.
///
/// ```rust
/// use argguard::collection::is_equal_to_array;
///
/// assert!(is_equal_to_array(Some(&[1, 2][..]), Some(&[1, 2][..]), false));
/// assert!(!is_equal_to_array(Some(&[1, 2][..]), Some(&[2, 1][..]), false));
/// assert!(is_equal_to_array(Some(&[1, 2][..]), Some(&[2, 1][..]), true));
/// assert!(is_equal_to_array::<i32>(None, None, false));
/// ```
pub fn is_equal_to_array<T: PartialEq>(
    value: Option<&[T]>,
    other: Option<&[T]>,
    ignore_order: bool,
) -> bool {
    match (value, other) {
        (None, None) => true,
        (Some(a), Some(b)) if ignore_order => {
            a.iter().all(|x| b.contains(x)) && b.iter().all(|x| a.contains(x))
        }
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Require a collection not to be empty. An absent collection passes.
pub fn cannot_be_empty_array<C, T>(value: Option<C>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
{
    let holds = is_empty_array(items(&value));
    cannot(value, holds, || "be empty".to_string())
}

/// Require a collection to be empty.
pub fn must_be_empty_array<C, T>(value: Option<C>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
{
    let holds = is_empty_array(items(&value));
    must(value, holds, || "be empty".to_string())
}

/// Require a collection to be present and non-empty.
///
/// The absence check runs first.
///
/// ```rust
/// use argguard::collection::cannot_be_null_or_empty_array;
///
/// assert_eq!(cannot_be_null_or_empty_array(Some(vec![1])), Ok(Some(vec![1])));
/// assert_eq!(
///     cannot_be_null_or_empty_array::<Vec<i32>, i32>(None).unwrap_err().message(),
///     "Value cannot be null."
/// );
/// assert_eq!(
///     cannot_be_null_or_empty_array(Some(Vec::<i32>::new())).unwrap_err().message(),
///     "Value cannot be empty."
/// );
/// ```
pub fn cannot_be_null_or_empty_array<C, T>(value: Option<C>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
{
    let value = object::cannot_be_null(value)?;
    cannot_be_empty_array(Some(value))
}

/// Require a collection to contain `item`.
pub fn must_contain<C, T>(value: Option<C>, item: Option<&T>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    T: PartialEq + Display,
{
    let holds = contains(items(&value), item)?;
    must(value, holds, || format!("contain {}", render::scalar(item)))
}

/// Require a collection not to contain `item`.
pub fn cannot_contain<C, T>(value: Option<C>, item: Option<&T>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    T: PartialEq + Display,
{
    let holds = contains(items(&value), item)?;
    cannot(value, holds, || format!("contain {}", render::scalar(item)))
}

/// Require a collection to contain every one of `expected`.
pub fn must_contain_all<C, T>(value: Option<C>, expected: Option<&[T]>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    T: PartialEq + Display,
{
    let holds = contains_all(items(&value), expected)?;
    must(value, holds, || {
        format!("contain all of {}", render::list(expected))
    })
}

/// Require a collection to contain at least one of `expected`.
pub fn must_contain_any<C, T>(value: Option<C>, expected: Option<&[T]>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    T: PartialEq + Display,
{
    let holds = contains_any(items(&value), expected)?;
    must(value, holds, || {
        format!("contain any of {}", render::list(expected))
    })
}

/// Require a collection to contain none of `unexpected`.
pub fn cannot_contain_any<C, T>(value: Option<C>, unexpected: Option<&[T]>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    T: PartialEq + Display,
{
    let holds = contains_any(items(&value), unexpected)?;
    cannot(value, holds, || {
        format!("contain any of {}", render::list(unexpected))
    })
}

/// Require at least one element to satisfy `selector`.
pub fn must_contain_matching<C, T, P>(value: Option<C>, selector: Option<P>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    P: Predicate<T>,
{
    let holds = contains_matching(items(&value), selector)?;
    must(value, holds, || "contain a matching element".to_string())
}

/// Require no element to satisfy `selector`.
pub fn cannot_contain_matching<C, T, P>(
    value: Option<C>,
    selector: Option<P>,
) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    P: Predicate<T>,
{
    let holds = contains_matching(items(&value), selector)?;
    cannot(value, holds, || "contain a matching element".to_string())
}

/// Require a non-empty collection whose elements all satisfy `selector`.
pub fn must_contain_only_matching<C, T, P>(
    value: Option<C>,
    selector: Option<P>,
) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    P: Predicate<T>,
{
    let holds = contains_only_matching(items(&value), selector)?;
    must(value, holds, || "contain only matching elements".to_string())
}

/// Require every element to occur once.
pub fn cannot_contain_duplicates<C, T>(value: Option<C>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    T: Eq + Hash,
{
    let holds = contains_duplicates(items(&value));
    cannot(value, holds, || "contain duplicates".to_string())
}

/// Require every element to be present.
pub fn cannot_contain_null<C, T>(value: Option<C>) -> Result<Option<C>>
where
    C: AsRef<[Option<T>]>,
{
    let holds = contains_null(items(&value));
    cannot(value, holds, || "contain null".to_string())
}

/// Require a non-empty collection of absent elements.
pub fn must_contain_only_null<C, T>(value: Option<C>) -> Result<Option<C>>
where
    C: AsRef<[Option<T>]>,
{
    let holds = contains_only_null(items(&value));
    must(value, holds, || "contain only null".to_string())
}

/// Require a collection to equal `other`.
pub fn must_be_equal_to_array<C, T>(
    value: Option<C>,
    other: Option<&[T]>,
    ignore_order: bool,
) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    T: PartialEq + Display,
{
    let holds = is_equal_to_array(items(&value), other, ignore_order);
    must(value, holds, || format!("be equal to {}", render::list(other)))
}

/// Require a collection to differ from `other`.
///
/// ```rust
/// use argguard::collection::cannot_be_equal_to_array;
///
/// assert_eq!(
///     cannot_be_equal_to_array(Some(vec![1, 2, 3]), Some(&[3, 4, 5][..]), false),
///     Ok(Some(vec![1, 2, 3]))
/// );
/// assert_eq!(
///     cannot_be_equal_to_array(Some(vec![1, 2, 3]), Some(&[1, 2, 3][..]), false)
///         .unwrap_err()
///         .message(),
///     "Value cannot be equal to [1, 2, 3]."
/// );
/// ```
pub fn cannot_be_equal_to_array<C, T>(
    value: Option<C>,
    other: Option<&[T]>,
    ignore_order: bool,
) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    T: PartialEq + Display,
{
    let holds = is_equal_to_array(items(&value), other, ignore_order);
    cannot(value, holds, || format!("be equal to {}", render::list(other)))
}

/// Return `default` if the collection is present and empty.
pub fn when_is_empty_array<C, T>(value: Option<C>, default: Option<C>) -> Option<C>
where
    C: AsRef<[T]>,
{
    let holds = is_empty_array(items(&value));
    when(value, holds, default)
}

/// Return `default` if the collection is absent or empty.
pub fn when_is_null_or_empty_array<C, T>(value: Option<C>, default: Option<C>) -> Option<C>
where
    C: AsRef<[T]>,
{
    let holds = is_null_or_empty_array(items(&value));
    when(value, holds, default)
}

/// Return `default` if the collection has elements.
pub fn when_is_null_or_empty_array_not<C, T>(value: Option<C>, default: Option<C>) -> Option<C>
where
    C: AsRef<[T]>,
{
    let holds = is_null_or_empty_array(items(&value));
    when_not(value, holds, default)
}

/// Return `default` if the collection contains `item`.
pub fn when_contains<C, T>(value: Option<C>, item: Option<&T>, default: Option<C>) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    T: PartialEq,
{
    let holds = contains(items(&value), item)?;
    Ok(when(value, holds, default))
}

/// Return `default` unless the collection contains `item`.
pub fn when_not_contains<C, T>(
    value: Option<C>,
    item: Option<&T>,
    default: Option<C>,
) -> Result<Option<C>>
where
    C: AsRef<[T]>,
    T: PartialEq,
{
    let holds = contains(items(&value), item)?;
    Ok(when_not(value, holds, default))
}

/// Return `default` if an element occurs more than once.
pub fn when_contains_duplicates<C, T>(value: Option<C>, default: Option<C>) -> Option<C>
where
    C: AsRef<[T]>,
    T: Eq + Hash,
{
    let holds = contains_duplicates(items(&value));
    when(value, holds, default)
}

/// Return `default` if an element is absent.
pub fn when_contains_null<C, T>(value: Option<C>, default: Option<C>) -> Option<C>
where
    C: AsRef<[Option<T>]>,
{
    let holds = contains_null(items(&value));
    when(value, holds, default)
}

/// Return `default` if the collection equals `other`.
pub fn when_equal_to_array<C, T>(
    value: Option<C>,
    other: Option<&[T]>,
    ignore_order: bool,
    default: Option<C>,
) -> Option<C>
where
    C: AsRef<[T]>,
    T: PartialEq,
{
    let holds = is_equal_to_array(items(&value), other, ignore_order);
    when(value, holds, default)
}

/// Return `default` if the collection differs from `other`.
pub fn when_not_equal_to_array<C, T>(
    value: Option<C>,
    other: Option<&[T]>,
    ignore_order: bool,
    default: Option<C>,
) -> Option<C>
where
    C: AsRef<[T]>,
    T: PartialEq,
{
    let holds = is_equal_to_array(items(&value), other, ignore_order);
    when_not(value, holds, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentError;

    #[test]
    fn test_empty_states() {
        let empty: &[i32] = &[];
        assert!(is_empty_array(Some(empty)));
        assert!(!is_empty_array(Some(&[1][..])));
        assert!(!is_empty_array::<i32>(None));

        assert!(is_null_or_empty_array::<i32>(None));
        assert!(is_null_or_empty_array(Some(empty)));
        assert!(!is_null_or_empty_array(Some(&[0][..])));
    }

    #[test]
    fn test_contains() {
        let v = [1, 2, 3];
        assert_eq!(contains(Some(&v[..]), Some(&2)), Ok(true));
        assert_eq!(contains(Some(&v[..]), Some(&5)), Ok(false));
        assert_eq!(contains(None, Some(&5)), Ok(false));
        assert_eq!(contains(Some(&v[..]), None), Err(ArgumentError::null_argument()));
        assert_eq!(contains::<i32>(None, None), Err(ArgumentError::null_argument()));
    }

    #[test]
    fn test_contains_all_any() {
        let v = ["a", "b"];
        assert_eq!(contains_all(Some(&v[..]), Some(&[][..])), Ok(true));
        assert_eq!(contains_any(Some(&v[..]), Some(&["c", "b"][..])), Ok(true));
        assert_eq!(contains_any(Some(&v[..]), Some(&["c"][..])), Ok(false));
        assert_eq!(contains_any(None, Some(&["a"][..])), Ok(false));
        assert!(contains_all::<&str>(Some(&v[..]), None).is_err());
    }

    #[test]
    fn test_contains_matching() {
        let v = [2, 4, 6];
        let even = |n: &i32| n % 2 == 0;
        assert_eq!(contains_matching(Some(&v[..]), Some(|n: &i32| *n > 5)), Ok(true));
        assert_eq!(contains_only_matching(Some(&v[..]), Some(even)), Ok(true));
        assert_eq!(contains_only_matching(Some(&[2, 3][..]), Some(even)), Ok(false));
        let none: &[i32] = &[];
        assert_eq!(contains_only_matching(Some(none), Some(even)), Ok(false));
        assert_eq!(contains_matching(None, Some(even)), Ok(false));
        assert_eq!(
            contains_matching::<i32, fn(&i32) -> bool>(None, None),
            Err(ArgumentError::null_argument())
        );
    }

    #[test]
    fn test_contains_duplicates() {
        assert!(contains_duplicates(Some(&["x", "y", "z", "y"][..])));
        assert!(!contains_duplicates(Some(&["x", "y", "z"][..])));
        assert!(!contains_duplicates::<i32>(Some(&[][..])));
        assert!(!contains_duplicates::<i32>(None));
    }

    #[test]
    fn test_null_elements() {
        let mixed = [Some(1), None];
        let nulls: [Option<i32>; 2] = [None, None];
        let none: [Option<i32>; 0] = [];

        assert!(contains_null(Some(&mixed[..])));
        assert!(contains_null(Some(&nulls[..])));
        assert!(!contains_null(Some(&[Some(1)][..])));
        assert!(!contains_null::<i32>(None));

        assert!(contains_only_null(Some(&nulls[..])));
        assert!(!contains_only_null(Some(&mixed[..])));
        assert!(!contains_only_null(Some(&none[..])));
        assert!(!contains_only_null::<i32>(None));
    }

    #[test]
    fn test_is_equal_to_array() {
        let a = [1, 2, 3];
        assert!(is_equal_to_array(Some(&a[..]), Some(&[1, 2, 3][..]), false));
        assert!(!is_equal_to_array(Some(&a[..]), Some(&[3, 2, 1][..]), false));
        assert!(is_equal_to_array(Some(&a[..]), Some(&[3, 2, 1][..]), true));
        assert!(!is_equal_to_array(Some(&a[..]), None, false));
        assert!(!is_equal_to_array(None, Some(&a[..]), true));
        assert!(is_equal_to_array::<i32>(None, None, true));
    }

    #[test]
    fn test_ignore_order_ignores_multiplicity() {
        assert!(is_equal_to_array(
            Some(&[1, 1, 2][..]),
            Some(&[1, 2, 2][..]),
            true
        ));
        assert!(is_equal_to_array(Some(&[1, 1, 2][..]), Some(&[1, 2][..]), true));
    }

    #[test]
    fn test_empty_guards() {
        assert_eq!(cannot_be_empty_array(Some(vec![1])), Ok(Some(vec![1])));
        assert_eq!(cannot_be_empty_array::<Vec<i32>, i32>(None), Ok(None));
        assert_eq!(
            cannot_be_empty_array(Some(Vec::<i32>::new())),
            Err(ArgumentError::new("Value cannot be empty."))
        );
        assert_eq!(must_be_empty_array(Some([0u8; 0])), Ok(Some([])));
        assert_eq!(
            cannot_be_null_or_empty_array::<Vec<i32>, i32>(None),
            Err(ArgumentError::new("Value cannot be null."))
        );
    }

    #[test]
    fn test_guard_returns_same_vec() {
        let v = vec![1, 2, 3];
        let ptr = v.as_ptr();
        let back = cannot_be_null_or_empty_array(Some(v)).unwrap().unwrap();
        assert_eq!(back.as_ptr(), ptr);
    }

    #[test]
    fn test_containment_guards() {
        assert_eq!(must_contain(Some(vec![1, 2]), Some(&2)), Ok(Some(vec![1, 2])));
        assert_eq!(
            must_contain(Some(vec![1, 2]), Some(&3)),
            Err(ArgumentError::new("Value must contain 3."))
        );
        assert_eq!(
            cannot_contain(Some(vec![1, 2]), Some(&2)),
            Err(ArgumentError::new("Value cannot contain 2."))
        );
        assert_eq!(
            must_contain_all(Some(vec![1, 2]), Some(&[1, 3][..])),
            Err(ArgumentError::new("Value must contain all of [1, 3]."))
        );
        assert_eq!(
            must_contain_any(Some(vec![1, 2]), Some(&[7, 8][..])),
            Err(ArgumentError::new("Value must contain any of [7, 8]."))
        );
        assert_eq!(
            cannot_contain_any(Some(vec![1, 2]), Some(&[2, 8][..])),
            Err(ArgumentError::new("Value cannot contain any of [2, 8]."))
        );
        assert_eq!(
            must_contain::<Vec<i32>, i32>(Some(vec![1]), None),
            Err(ArgumentError::null_argument())
        );
    }

    #[test]
    fn test_matching_guards() {
        let positive = |n: &i32| *n > 0;
        assert_eq!(
            must_contain_matching(Some(vec![-1, 1]), Some(positive)),
            Ok(Some(vec![-1, 1]))
        );
        assert_eq!(
            cannot_contain_matching(Some(vec![-1, 1]), Some(positive)),
            Err(ArgumentError::new("Value cannot contain a matching element."))
        );
        assert_eq!(
            must_contain_only_matching(Some(vec![-1, 1]), Some(positive)),
            Err(ArgumentError::new("Value must contain only matching elements."))
        );
    }

    #[test]
    fn test_element_guards() {
        assert_eq!(
            cannot_contain_duplicates(Some(vec!["a", "b", "a"])),
            Err(ArgumentError::new("Value cannot contain duplicates."))
        );
        assert_eq!(
            cannot_contain_null(Some(vec![Some(1), None])),
            Err(ArgumentError::new("Value cannot contain null."))
        );
        assert_eq!(
            cannot_contain_null(Some(vec![Some(1)])),
            Ok(Some(vec![Some(1)]))
        );
        assert_eq!(
            must_contain_only_null(Some(vec![Some(1), None])),
            Err(ArgumentError::new("Value must contain only null."))
        );
        assert_eq!(
            must_contain_only_null(Some(vec![None::<i32>])),
            Ok(Some(vec![None]))
        );
    }

    #[test]
    fn test_equality_guards() {
        assert_eq!(
            cannot_be_equal_to_array(Some(vec![1, 2, 3]), Some(&[1, 2, 3][..]), false),
            Err(ArgumentError::new("Value cannot be equal to [1, 2, 3]."))
        );
        assert_eq!(
            cannot_be_equal_to_array(Some(vec![1, 2, 3]), Some(&[3, 4, 5][..]), false),
            Ok(Some(vec![1, 2, 3]))
        );
        assert_eq!(
            must_be_equal_to_array(Some(vec![1, 2]), Some(&[2, 1][..]), false),
            Err(ArgumentError::new("Value must be equal to [2, 1]."))
        );
        assert_eq!(
            must_be_equal_to_array(Some(vec![1, 2]), Some(&[2, 1][..]), true),
            Ok(Some(vec![1, 2]))
        );
        assert_eq!(
            must_be_equal_to_array(Some(vec![1]), None, false),
            Err(ArgumentError::new("Value must be equal to null."))
        );
    }

    #[test]
    fn test_substitutions() {
        assert_eq!(when_is_null_or_empty_array(Some(vec![]), Some(vec![9])), Some(vec![9]));
        assert_eq!(
            when_is_null_or_empty_array(Some(vec![1, 2]), Some(vec![9])),
            Some(vec![1, 2])
        );
        assert_eq!(when_is_null_or_empty_array(None, Some(vec![9])), Some(vec![9]));
        assert_eq!(when_is_empty_array(None, Some(vec![9])), None);
        assert_eq!(
            when_is_null_or_empty_array_not(Some(vec![1]), Some(vec![9])),
            Some(vec![9])
        );
        assert_eq!(
            when_contains_duplicates(Some(vec![1, 1]), Some(vec![1])),
            Some(vec![1])
        );
        assert_eq!(
            when_contains_null(Some(vec![None, Some(2)]), Some(vec![])),
            Some(vec![])
        );
    }

    #[test]
    fn test_substitutions_with_arguments() {
        assert_eq!(when_contains(Some(vec![1, 2]), Some(&2), Some(vec![])), Ok(Some(vec![])));
        assert_eq!(
            when_not_contains(Some(vec![1, 2]), Some(&2), Some(vec![])),
            Ok(Some(vec![1, 2]))
        );
        assert!(when_contains::<Vec<i32>, i32>(Some(vec![1]), None, None).is_err());
        assert_eq!(
            when_equal_to_array(Some(vec![1, 2]), Some(&[1, 2][..]), false, Some(vec![0])),
            Some(vec![0])
        );
        assert_eq!(
            when_not_equal_to_array(Some(vec![1, 2]), Some(&[1, 2][..]), false, Some(vec![0])),
            Some(vec![1, 2])
        );
    }

    #[test]
    fn test_non_empty_substitution() {
        assert_eq!(when_is_null_or_empty_array_not(Some(vec![]), Some(vec![9])), Some(vec![]));
        assert_eq!(when_is_null_or_empty_array_not(None, Some(vec![9])), None);
        assert_eq!(
            when_is_null_or_empty_array_not(Some([4, 5]), Some([0, 0])),
            Some([0, 0])
        );
    }

    #[test]
    fn test_inequality_substitution() {
        assert_eq!(
            when_not_equal_to_array(Some(vec![1, 2]), Some(&[2, 1][..]), false, Some(vec![0])),
            Some(vec![0])
        );
        assert_eq!(
            when_not_equal_to_array(Some(vec![1, 2]), Some(&[2, 1][..]), true, Some(vec![0])),
            Some(vec![1, 2])
        );
        assert_eq!(
            when_not_equal_to_array(Some(vec![1]), None, false, Some(vec![0])),
            Some(vec![0])
        );
        assert_eq!(
            when_not_equal_to_array::<Vec<i32>, i32>(None, None, false, Some(vec![0])),
            None
        );
    }

    #[test]
    fn test_element_substitutions_keep_clean_values() {
        assert_eq!(
            when_contains_null(Some(vec![Some(1), Some(2)]), Some(vec![])),
            Some(vec![Some(1), Some(2)])
        );
        assert_eq!(when_contains_null::<Vec<Option<i32>>, i32>(None, Some(vec![])), None);
        assert_eq!(
            when_contains_duplicates(Some(vec!["a", "b"]), Some(vec![])),
            Some(vec!["a", "b"])
        );
        assert_eq!(when_contains_duplicates::<Vec<u8>, u8>(None, Some(vec![1])), None);
    }

    #[test]
    fn test_exclusion_guards() {
        assert_eq!(
            cannot_contain_any(Some(vec![1, 2]), Some(&[7, 8][..])),
            Ok(Some(vec![1, 2]))
        );
        assert_eq!(cannot_contain_any(Some(vec![1, 2]), Some(&[][..])), Ok(Some(vec![1, 2])));
        assert_eq!(cannot_contain_any::<Vec<i32>, i32>(None, Some(&[1][..])), Ok(None));
        assert_eq!(
            cannot_contain_any::<Vec<i32>, i32>(Some(vec![1]), None),
            Err(ArgumentError::null_argument())
        );
        assert_eq!(
            cannot_contain_any(Some(vec!["x", "y"]), Some(&["y"][..])),
            Err(ArgumentError::new("Value cannot contain any of [y]."))
        );
    }

    #[test]
    fn test_exclusion_by_selector() {
        let negative = |n: &i32| *n < 0;
        assert_eq!(
            cannot_contain_matching(Some(vec![0, 3]), Some(negative)),
            Ok(Some(vec![0, 3]))
        );
        assert_eq!(
            cannot_contain_matching::<Vec<i32>, i32, _>(None, Some(negative)),
            Ok(None)
        );
        assert_eq!(
            cannot_contain_matching(Some(vec![0, -3]), Some(&negative)),
            Err(ArgumentError::new("Value cannot contain a matching element."))
        );
        assert_eq!(
            cannot_contain_matching::<Vec<i32>, i32, fn(&i32) -> bool>(Some(vec![1]), None),
            Err(ArgumentError::null_argument())
        );
    }
}
