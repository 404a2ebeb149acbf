//! Element selectors
//!
//! The matching checks in [`collection`](crate::collection) take a
//! caller-supplied condition over each element. Any closure or function
//! of the right shape is a [`Predicate`]; build richer selectors by
//! writing them out in the closure body.
//!
//! # Example
//!
//! ```rust
//! use argguard::collection::must_contain_only_matching;
//!
//! let in_stock = |qty: &u32| *qty > 0;
//! assert!(must_contain_only_matching(Some(vec![3, 1]), Some(in_stock)).is_ok());
//! assert!(must_contain_only_matching(Some(vec![3, 0]), Some(&in_stock)).is_err());
//! ```

/// A condition an element of a collection either meets or does not.
pub trait Predicate<T: ?Sized>: Send + Sync {
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}
