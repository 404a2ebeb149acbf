//! Testing utilities for code that uses argguard
//!
//! Includes an in-memory [`FileSystem`] for exercising path checks without
//! touching disk, assertion macros for guard results, and (behind the
//! `proptest` feature) strategies for property-based tests.
//!
//! # Examples
//!
//! ## MemoryFileSystem
//!
//! ```rust
//! use argguard::fs::{DefaultPathPolicy, Paths};
//! use argguard::testing::MemoryFileSystem;
//!
//! let files = MemoryFileSystem::new()
//!     .with_dir("/srv/empty")
//!     .with_file("/srv/app/config.toml");
//! let paths = Paths::new(files, DefaultPathPolicy);
//!
//! assert_eq!(paths.does_directory_exist(Some("/srv/app")), Ok(true));
//! assert_eq!(paths.is_empty_directory(Some("/srv/empty")), Ok(true));
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use argguard::{assert_guard_err, assert_guard_ok, string};
//!
//! assert_guard_ok!(string::cannot_be_blank(Some("x")), Some("x"));
//! assert_guard_err!(string::cannot_be_blank(Some(" ")), "Value cannot be blank.");
//! ```

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::FileSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Directory,
    File,
    Unreadable,
}

/// A file system held in memory.
///
/// Adding an entry also adds every parent directory. Entries are never
/// removed; build a new value per scenario.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    entries: BTreeMap<PathBuf, Entry>,
}

impl MemoryFileSystem {
    /// Create an empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory at `path`.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.with(path.as_ref(), Entry::Directory)
    }

    /// Add a file at `path`.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with(path.as_ref(), Entry::File)
    }

    /// Add a directory at `path` that exists but cannot be listed.
    pub fn with_unreadable_dir(self, path: impl AsRef<Path>) -> Self {
        self.with(path.as_ref(), Entry::Unreadable)
    }

    fn with(mut self, path: &Path, entry: Entry) -> Self {
        for parent in path.ancestors().skip(1) {
            if parent.as_os_str().is_empty() {
                continue;
            }
            self.entries
                .entry(parent.to_path_buf())
                .or_insert(Entry::Directory);
        }
        self.entries.insert(path.to_path_buf(), entry);
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        match self.entries.get(path) {
            Some(Entry::Directory) => Ok(self
                .entries
                .keys()
                .filter(|entry| entry.parent() == Some(path))
                .cloned()
                .collect()),
            Some(Entry::File) => Err(io::ErrorKind::NotADirectory.into()),
            Some(Entry::Unreadable) => Err(io::ErrorKind::PermissionDenied.into()),
            None => Err(io::ErrorKind::NotFound.into()),
        }
    }
}

/// Assert that a guard passed, evaluating to the value it returned.
///
/// With a second argument, also asserts the returned value equals it.
///
/// # Example
///
/// ```rust
/// use argguard::{assert_guard_ok, number};
///
/// let n = assert_guard_ok!(number::must_be_positive(Some(3)));
/// assert_eq!(n, Some(3));
/// assert_guard_ok!(number::must_be_positive(Some(3)), Some(3));
/// ```
#[macro_export]
macro_rules! assert_guard_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected guard to pass, got error: {}", e),
        }
    };
    ($result:expr, $expected:expr) => {
        match $result {
            Ok(value) => assert_eq!(value, $expected),
            Err(e) => panic!("Expected guard to pass, got error: {}", e),
        }
    };
}

/// Assert that a guard failed, evaluating to the error.
///
/// With a second argument, also asserts the error message equals it.
///
/// # Example
///
/// ```rust
/// use argguard::{assert_guard_err, number};
///
/// let err = assert_guard_err!(number::cannot_be_zero(Some(0)));
/// assert_eq!(err.message(), "Value cannot be zero.");
/// assert_guard_err!(number::cannot_be_zero(Some(0)), "Value cannot be zero.");
/// ```
#[macro_export]
macro_rules! assert_guard_err {
    ($result:expr) => {
        match $result {
            Err(e) => e,
            Ok(value) => panic!("Expected guard to fail, got value: {:?}", value),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Err(e) => assert_eq!(e.message(), $message),
            Ok(value) => panic!("Expected guard to fail, got value: {:?}", value),
        }
    };
}

#[cfg(feature = "proptest")]
pub use strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::error::ArgumentError;

    impl Arbitrary for ArgumentError {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            any::<String>().prop_map(ArgumentError::new).boxed()
        }
    }

    /// Non-empty strings made only of whitespace.
    pub fn blank_string() -> impl Strategy<Value = String> {
        "[ \t\n\r]{1,8}"
    }

    /// Strings with at least one visible character.
    pub fn non_blank_string() -> impl Strategy<Value = String> {
        " {0,2}[a-zA-Z0-9]{1,12} {0,2}"
    }

    /// Bare file names without separators.
    pub fn file_name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_-]{1,12}(\\.[a-z]{1,4})?"
    }

    /// Optional values where `None` shows up about a quarter of the time.
    pub fn maybe<S: Strategy>(inner: S) -> impl Strategy<Value = Option<S::Value>> {
        proptest::option::weighted(0.75, inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArgumentError, Result};

    #[test]
    fn memory_fs_parents_exist() {
        let fs = MemoryFileSystem::new().with_file("/a/b/c.txt");
        assert!(fs.exists(Path::new("/a/b/c.txt")));
        assert!(fs.exists(Path::new("/a/b")));
        assert!(fs.exists(Path::new("/a")));
        assert!(!fs.exists(Path::new("/a/c")));
    }

    #[test]
    fn memory_fs_lists_direct_children() {
        let fs = MemoryFileSystem::new()
            .with_file("/a/one.txt")
            .with_file("/a/sub/two.txt")
            .with_dir("/a/empty");

        let entries = fs.read_dir(Path::new("/a")).unwrap();
        assert_eq!(
            entries,
            vec![
                PathBuf::from("/a/empty"),
                PathBuf::from("/a/one.txt"),
                PathBuf::from("/a/sub"),
            ]
        );
        assert!(fs.read_dir(Path::new("/a/empty")).unwrap().is_empty());
    }

    #[test]
    fn memory_fs_listing_errors() {
        let fs = MemoryFileSystem::new()
            .with_file("/f.txt")
            .with_unreadable_dir("/locked");

        let kind = |p: &str| fs.read_dir(Path::new(p)).unwrap_err().kind();
        assert_eq!(kind("/missing"), io::ErrorKind::NotFound);
        assert_eq!(kind("/f.txt"), io::ErrorKind::NotADirectory);
        assert_eq!(kind("/locked"), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn assert_guard_ok_macro() {
        let result: Result<i32> = Ok(4);
        assert_eq!(assert_guard_ok!(result.clone()), 4);
        assert_guard_ok!(result, 4);
    }

    #[test]
    fn assert_guard_err_macro() {
        let result: Result<i32> = Err(ArgumentError::new("Value cannot be zero."));
        let err = assert_guard_err!(result.clone());
        assert_eq!(err.message(), "Value cannot be zero.");
        assert_guard_err!(result, "Value cannot be zero.");
    }

    #[test]
    #[should_panic(expected = "Expected guard to pass")]
    fn assert_guard_ok_panics_on_error() {
        let result: Result<i32> = Err(ArgumentError::null_argument());
        assert_guard_ok!(result);
    }

    #[test]
    #[should_panic(expected = "Expected guard to fail")]
    fn assert_guard_err_panics_on_value() {
        let result: Result<i32> = Ok(1);
        assert_guard_err!(result);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use crate::string;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn blank_strings_are_blank(s in blank_string()) {
                prop_assert!(string::is_blank(Some(s.as_str())));
            }

            #[test]
            fn non_blank_strings_are_not_blank(s in non_blank_string()) {
                prop_assert!(!string::is_null_or_blank(Some(s.as_str())));
            }

            #[test]
            fn file_names_are_valid(name in file_name()) {
                prop_assert!(crate::fs::is_valid_file_name(Some(name.as_str())));
            }

            #[test]
            fn absent_or_blank_is_null_or_blank(s in maybe(blank_string())) {
                prop_assert!(string::is_null_or_blank(s.as_deref()));
            }

            #[test]
            fn arbitrary_errors_keep_their_message(err in any::<ArgumentError>()) {
                prop_assert_eq!(err.to_string(), err.message());
            }
        }
    }
}
