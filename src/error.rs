//! The single error kind raised by guards
//!
//! Every failure in this crate is an [`ArgumentError`] carrying a
//! human-readable message. Two kinds of failure share it:
//!
//! - **Invocation errors**: a required auxiliary argument (a bound, a
//!   selector, a regex, a candidate set) was absent. The message is always
//!   `"Value cannot be null."`.
//! - **Contract violations**: the guarded condition did not hold. The
//!   message names the condition, e.g. `"Value must be positive."`.
//!
//! # Example
//!
//! ```
//! use argguard::{number, ArgumentError};
//!
//! let err = number::must_be_positive(Some(-3)).unwrap_err();
//! assert_eq!(err, ArgumentError::new("Value must be positive."));
//! assert_eq!(err.to_string(), "Value must be positive.");
//! ```

use thiserror::Error;

/// Message used for every invocation error.
pub(crate) const NULL_MESSAGE: &str = "Value cannot be null.";

/// A guard failure.
///
/// Carries only a message: no code, no payload, no source chain.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct ArgumentError {
    message: String,
}

impl ArgumentError {
    /// Create an error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use argguard::ArgumentError;
    ///
    /// let err = ArgumentError::new("Value cannot be empty.");
    /// assert_eq!(err.message(), "Value cannot be empty.");
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        ArgumentError {
            message: message.into(),
        }
    }

    /// The invocation error raised when a required argument is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use argguard::ArgumentError;
    ///
    /// assert_eq!(ArgumentError::null_argument().message(), "Value cannot be null.");
    /// ```
    pub fn null_argument() -> Self {
        ArgumentError::new(NULL_MESSAGE)
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Result alias used by every fallible guard, predicate and substitution.
pub type Result<T> = std::result::Result<T, ArgumentError>;

/// Unwrap a required auxiliary argument or raise the invocation error.
pub(crate) fn required<T>(argument: Option<T>) -> Result<T> {
    argument.ok_or_else(ArgumentError::null_argument)
}
