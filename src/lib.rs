//! # argguard
//!
//! Guard clauses for function arguments.
//!
//! Every check comes in three tiers over the same condition:
//!
//! - **Predicates** (`is_*`, `does_*`, `contains_*`) answer `true` or `false`.
//! - **Guards** (`must_*`, `cannot_*`) hand the value back unchanged, or fail
//!   with an [`ArgumentError`] such as `"Value must be positive."`.
//! - **Substitutions** (`when_*`, `when_not_*`) hand back the value, or a
//!   default in its place.
//!
//! Checks are grouped by the kind of value they inspect: [`object`],
//! [`string`], [`number`], [`collection`] and [`fs`] paths. A value that may
//! be missing is an `Option`, and absence is never an error unless the check
//! is about absence.
//!
//! ## Quick Example
//!
//! ```rust
//! use argguard::{collection, number, string, ArgumentError};
//!
//! fn create_user(
//!     name: Option<&str>,
//!     age: Option<u32>,
//!     roles: Option<Vec<&str>>,
//! ) -> Result<(String, u32, Vec<String>), ArgumentError> {
//!     let name = string::cannot_be_null_or_blank(name)?.unwrap_or_default();
//!     let age = number::must_be_between(age, Some(&18), Some(&130), true)?.unwrap_or_default();
//!     let roles = collection::when_is_null_or_empty_array(roles, Some(vec!["member"]));
//!     let roles = collection::cannot_contain_duplicates(roles)?.unwrap_or_default();
//!     Ok((name.to_string(), age, roles.iter().map(|r| r.to_string()).collect()))
//! }
//!
//! let (name, age, roles) = create_user(Some("ada"), Some(36), None).unwrap();
//! assert_eq!((name.as_str(), age), ("ada", 36));
//! assert_eq!(roles, vec!["member".to_string()]);
//!
//! let err = create_user(Some("   "), Some(36), None).unwrap_err();
//! assert_eq!(err.message(), "Value cannot be blank.");
//!
//! let err = create_user(Some("bob"), Some(12), None).unwrap_err();
//! assert_eq!(err.message(), "Value must be between 18 and 130 inclusive.");
//! ```
//!
//! ## Features
//!
//! - `tracing`: guard failures, file-system probes and listing failures are
//!   reported as `tracing` events.
//! - `serde`: `Serialize`/`Deserialize` for [`ArgumentError`].
//! - `proptest`: strategies in [`testing`] and `Arbitrary` for [`ArgumentError`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod collection;
pub mod compare;
pub mod error;
pub mod fs;
pub mod guard;
pub mod number;
pub mod object;
pub mod predicate;
pub mod string;
pub mod testing;

mod render;

// Re-exports
pub use error::{ArgumentError, Result};
pub use predicate::Predicate;

/// Prelude module for convenient imports
///
/// Brings the error type and the capability traits into scope. Check
/// functions stay behind their module names, since several domains share
/// names like `when_contains`.
pub mod prelude {
    pub use crate::compare::Ordered;
    pub use crate::error::{ArgumentError, Result};
    pub use crate::fs::{DefaultPathPolicy, FileSystem, PathPolicy, Paths, StdFileSystem};
    pub use crate::number::Number;
    pub use crate::object::Typed;
    pub use crate::predicate::Predicate;
    pub use crate::{collection, fs, number, object, string};
}
