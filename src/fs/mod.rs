//! File-system path checks
//!
//! Paths are passed as strings. Before any probe runs, a path must be
//! present, non-empty, non-blank and accepted by a [`PathPolicy`]; an
//! invalid path is an error rather than a `false` answer. Existence and
//! listing go through a [`FileSystem`] collaborator.
//!
//! [`Paths`] bundles the two collaborators. The free functions in this
//! module use the operating system ([`StdFileSystem`]) and the permissive
//! [`DefaultPathPolicy`].
//!
//! # Example
//!
//! ```rust
//! use argguard::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().to_str().unwrap();
//!
//! assert_eq!(fs::does_directory_exist(Some(path)), Ok(true));
//! assert_eq!(fs::is_empty_directory(Some(path)), Ok(true));
//! assert!(fs::must_exist_file(Some(path.to_string() + "/missing.txt")).is_err());
//!
//! assert_eq!(fs::must_be_valid_file_name(Some("temp.txt")), Ok(Some("temp.txt")));
//! assert!(fs::must_be_valid_file_name(Some("C:\\temp.txt")).is_err());
//! ```
//!
//! Probes are blocking and not atomic: a directory can appear or vanish
//! between two calls.

mod policy;
mod probe;

pub use policy::{DefaultPathPolicy, PathPolicy};
pub use probe::{FileSystem, StdFileSystem};

use std::path::Path;

use crate::error::{ArgumentError, Result};
use crate::guard::{cannot, must, when, when_not};
use crate::{object, string};

fn text<S: AsRef<str>>(value: &Option<S>) -> Option<&str> {
    value.as_ref().map(|s| s.as_ref())
}

/// A file system and a path policy used together by the path checks.
///
/// # Example
///
/// ```rust
/// use argguard::fs::{DefaultPathPolicy, Paths};
/// use argguard::testing::MemoryFileSystem;
///
/// let files = MemoryFileSystem::new().with_file("/srv/app/config.toml");
/// let paths = Paths::new(&files, DefaultPathPolicy);
///
/// assert_eq!(paths.does_file_exist(Some("/srv/app/config.toml")), Ok(true));
/// assert_eq!(paths.is_empty_directory(Some("/srv/app")), Ok(false));
/// assert_eq!(paths.is_empty_directory(Some("/srv/other")), Ok(true));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paths<F = StdFileSystem, P = DefaultPathPolicy> {
    file_system: F,
    policy: P,
}

const STD: Paths = Paths {
    file_system: StdFileSystem,
    policy: DefaultPathPolicy,
};

impl<F: FileSystem, P: PathPolicy> Paths<F, P> {
    /// Check paths against `file_system` using the rules in `policy`.
    pub fn new(file_system: F, policy: P) -> Self {
        Self {
            file_system,
            policy,
        }
    }

    /// The file system probed by this context.
    pub fn file_system(&self) -> &F {
        &self.file_system
    }

    /// The path rules applied by this context.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    fn is_valid(&self, value: Option<&str>, accepts: impl FnOnce(&P, &str) -> bool) -> bool {
        !string::is_null_or_blank(value) && value.is_some_and(|p| accepts(&self.policy, p))
    }

    fn must_be_valid<S: AsRef<str>>(
        &self,
        value: Option<S>,
        accepts: impl FnOnce(&P, &str) -> bool,
        kind: &str,
    ) -> Result<Option<S>> {
        let value = string::cannot_be_null_or_blank(value)?;
        let holds = text(&value).is_some_and(|p| accepts(&self.policy, p));
        must(value, holds, || format!("be a valid {kind}"))
    }

    /// Check if a string is a usable directory path.
    pub fn is_valid_directory_path(&self, value: Option<&str>) -> bool {
        self.is_valid(value, P::is_valid_directory_path)
    }

    /// Check if a string is a usable file path.
    pub fn is_valid_file_path(&self, value: Option<&str>) -> bool {
        self.is_valid(value, P::is_valid_file_path)
    }

    /// Check if a string is a usable bare file name.
    pub fn is_valid_file_name(&self, value: Option<&str>) -> bool {
        self.is_valid(value, P::is_valid_file_name)
    }

    // A present path accepted by the policy, ready for the file system.
    fn checked_path<'a>(
        &self,
        value: Option<&'a str>,
        accepts: impl FnOnce(&P, &str) -> bool,
        kind: &str,
    ) -> Result<&'a Path> {
        let path = object::cannot_be_null(value)?;
        self.must_be_valid(Some(path), accepts, kind)?;
        Ok(Path::new(path))
    }

    /// Check if anything exists at the directory path `value`.
    ///
    /// Only existence is checked, not the kind of entry: a regular file at
    /// `value` also answers `true`. Fails if `value` is not a valid
    /// directory path.
    pub fn does_directory_exist(&self, value: Option<&str>) -> Result<bool> {
        let path = self.checked_path(value, P::is_valid_directory_path, "directory path")?;
        Ok(self.file_system.exists(path))
    }

    /// Check if anything exists at the file path `value`.
    ///
    /// Only existence is checked, not the kind of entry: a directory at
    /// `value` also answers `true`. Fails if `value` is not a valid file path.
    pub fn does_file_exist(&self, value: Option<&str>) -> Result<bool> {
        let path = self.checked_path(value, P::is_valid_file_path, "file path")?;
        Ok(self.file_system.exists(path))
    }

    /// Check if a path is absolute. An absent path counts as absolute.
    pub fn is_absolute_path(&self, value: Option<&str>) -> bool {
        value.is_none_or(|p| Path::new(p).is_absolute())
    }

    /// Check if the directory at `value` has no entries.
    ///
    /// A directory that does not exist counts as empty. Fails if `value` is
    /// not a valid directory path or the directory cannot be listed.
    pub fn is_empty_directory(&self, value: Option<&str>) -> Result<bool> {
        let path = self.checked_path(value, P::is_valid_directory_path, "directory path")?;
        if !self.file_system.exists(path) {
            return Ok(true);
        }
        match self.file_system.read_dir(path) {
            Ok(entries) => Ok(entries.is_empty()),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(path = %path.display(), error = %err, "could not list directory");
                Err(ArgumentError::new(format!(
                    "Value could not be listed as a directory: {err}."
                )))
            }
        }
    }

    /// Require a valid directory path.
    ///
    /// Checks run in order: absent, empty, blank, then the policy.
    pub fn must_be_valid_directory_path<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        self.must_be_valid(value, P::is_valid_directory_path, "directory path")
    }

    /// Require a valid file path.
    pub fn must_be_valid_file_path<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        self.must_be_valid(value, P::is_valid_file_path, "file path")
    }

    /// Require a valid bare file name.
    pub fn must_be_valid_file_name<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        self.must_be_valid(value, P::is_valid_file_name, "file name")
    }

    /// Require a directory to exist at `value`.
    pub fn must_exist_directory<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        let holds = self.does_directory_exist(text(&value))?;
        must(value, holds, || "be an existing directory".to_string())
    }

    /// Require nothing to exist at the directory path `value`.
    pub fn cannot_exist_directory<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        let holds = self.does_directory_exist(text(&value))?;
        cannot(value, holds, || "be an existing directory".to_string())
    }

    /// Require a file to exist at `value`.
    pub fn must_exist_file<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        let holds = self.does_file_exist(text(&value))?;
        must(value, holds, || "be an existing file".to_string())
    }

    /// Require nothing to exist at the file path `value`.
    pub fn cannot_exist_file<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        let holds = self.does_file_exist(text(&value))?;
        cannot(value, holds, || "be an existing file".to_string())
    }

    /// Require an absolute path. An absent path passes.
    pub fn must_be_absolute_path<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        let holds = self.is_absolute_path(text(&value));
        must(value, holds, || "be an absolute path".to_string())
    }

    /// Require a relative path. An absent path fails.
    pub fn cannot_be_absolute_path<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        let holds = self.is_absolute_path(text(&value));
        cannot(value, holds, || "be an absolute path".to_string())
    }

    /// Require the directory at `value` to be empty or missing.
    pub fn must_be_empty_directory<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        let holds = self.is_empty_directory(text(&value))?;
        must(value, holds, || "be an empty directory".to_string())
    }

    /// Require the directory at `value` to have entries.
    pub fn cannot_be_empty_directory<S: AsRef<str>>(&self, value: Option<S>) -> Result<Option<S>> {
        let holds = self.is_empty_directory(text(&value))?;
        cannot(value, holds, || "be an empty directory".to_string())
    }

    /// Return `default` if a directory exists at `value`.
    pub fn when_directory_exists<S: AsRef<str>>(
        &self,
        value: Option<S>,
        default: Option<S>,
    ) -> Result<Option<S>> {
        let holds = self.does_directory_exist(text(&value))?;
        Ok(when(value, holds, default))
    }

    /// Return `default` unless a directory exists at `value`.
    pub fn when_directory_exists_not<S: AsRef<str>>(
        &self,
        value: Option<S>,
        default: Option<S>,
    ) -> Result<Option<S>> {
        let holds = self.does_directory_exist(text(&value))?;
        Ok(when_not(value, holds, default))
    }

    /// Return `default` if a file exists at `value`.
    pub fn when_file_exists<S: AsRef<str>>(
        &self,
        value: Option<S>,
        default: Option<S>,
    ) -> Result<Option<S>> {
        let holds = self.does_file_exist(text(&value))?;
        Ok(when(value, holds, default))
    }

    /// Return `default` unless a file exists at `value`.
    pub fn when_file_exists_not<S: AsRef<str>>(
        &self,
        value: Option<S>,
        default: Option<S>,
    ) -> Result<Option<S>> {
        let holds = self.does_file_exist(text(&value))?;
        Ok(when_not(value, holds, default))
    }

    /// Return `default` if the path is absolute or absent.
    pub fn when_absolute_path<S: AsRef<str>>(&self, value: Option<S>, default: Option<S>) -> Option<S> {
        let holds = self.is_absolute_path(text(&value));
        when(value, holds, default)
    }

    /// Return `default` if the path is relative.
    pub fn when_not_absolute_path<S: AsRef<str>>(
        &self,
        value: Option<S>,
        default: Option<S>,
    ) -> Option<S> {
        let holds = self.is_absolute_path(text(&value));
        when_not(value, holds, default)
    }

    /// Return `default` if the directory at `value` is empty or missing.
    pub fn when_empty_directory<S: AsRef<str>>(
        &self,
        value: Option<S>,
        default: Option<S>,
    ) -> Result<Option<S>> {
        let holds = self.is_empty_directory(text(&value))?;
        Ok(when(value, holds, default))
    }

    /// Return `default` if the directory at `value` has entries.
    pub fn when_not_empty_directory<S: AsRef<str>>(
        &self,
        value: Option<S>,
        default: Option<S>,
    ) -> Result<Option<S>> {
        let holds = self.is_empty_directory(text(&value))?;
        Ok(when_not(value, holds, default))
    }
}

/// See [`Paths::is_valid_directory_path`].
pub fn is_valid_directory_path(value: Option<&str>) -> bool {
    STD.is_valid_directory_path(value)
}

/// See [`Paths::is_valid_file_path`].
pub fn is_valid_file_path(value: Option<&str>) -> bool {
    STD.is_valid_file_path(value)
}

/// See [`Paths::is_valid_file_name`].
pub fn is_valid_file_name(value: Option<&str>) -> bool {
    STD.is_valid_file_name(value)
}

/// See [`Paths::does_directory_exist`].
pub fn does_directory_exist(value: Option<&str>) -> Result<bool> {
    STD.does_directory_exist(value)
}

/// See [`Paths::does_file_exist`].
pub fn does_file_exist(value: Option<&str>) -> Result<bool> {
    STD.does_file_exist(value)
}

/// See [`Paths::is_absolute_path`].
pub fn is_absolute_path(value: Option<&str>) -> bool {
    STD.is_absolute_path(value)
}

/// See [`Paths::is_empty_directory`].
pub fn is_empty_directory(value: Option<&str>) -> Result<bool> {
    STD.is_empty_directory(value)
}

/// See [`Paths::must_be_valid_directory_path`].
pub fn must_be_valid_directory_path<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.must_be_valid_directory_path(value)
}

/// See [`Paths::must_be_valid_file_path`].
pub fn must_be_valid_file_path<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.must_be_valid_file_path(value)
}

/// See [`Paths::must_be_valid_file_name`].
pub fn must_be_valid_file_name<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.must_be_valid_file_name(value)
}

/// See [`Paths::must_exist_directory`].
pub fn must_exist_directory<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.must_exist_directory(value)
}

/// See [`Paths::cannot_exist_directory`].
pub fn cannot_exist_directory<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.cannot_exist_directory(value)
}

/// See [`Paths::must_exist_file`].
pub fn must_exist_file<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.must_exist_file(value)
}

/// See [`Paths::cannot_exist_file`].
pub fn cannot_exist_file<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.cannot_exist_file(value)
}

/// See [`Paths::must_be_absolute_path`].
pub fn must_be_absolute_path<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.must_be_absolute_path(value)
}

/// See [`Paths::cannot_be_absolute_path`].
pub fn cannot_be_absolute_path<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.cannot_be_absolute_path(value)
}

/// See [`Paths::must_be_empty_directory`].
pub fn must_be_empty_directory<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.must_be_empty_directory(value)
}

/// See [`Paths::cannot_be_empty_directory`].
pub fn cannot_be_empty_directory<S: AsRef<str>>(value: Option<S>) -> Result<Option<S>> {
    STD.cannot_be_empty_directory(value)
}

/// See [`Paths::when_directory_exists`].
pub fn when_directory_exists<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Result<Option<S>> {
    STD.when_directory_exists(value, default)
}

/// See [`Paths::when_directory_exists_not`].
pub fn when_directory_exists_not<S: AsRef<str>>(
    value: Option<S>,
    default: Option<S>,
) -> Result<Option<S>> {
    STD.when_directory_exists_not(value, default)
}

/// See [`Paths::when_file_exists`].
pub fn when_file_exists<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Result<Option<S>> {
    STD.when_file_exists(value, default)
}

/// See [`Paths::when_file_exists_not`].
pub fn when_file_exists_not<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Result<Option<S>> {
    STD.when_file_exists_not(value, default)
}

/// See [`Paths::when_absolute_path`].
pub fn when_absolute_path<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Option<S> {
    STD.when_absolute_path(value, default)
}

/// See [`Paths::when_not_absolute_path`].
pub fn when_not_absolute_path<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Option<S> {
    STD.when_not_absolute_path(value, default)
}

/// See [`Paths::when_empty_directory`].
pub fn when_empty_directory<S: AsRef<str>>(value: Option<S>, default: Option<S>) -> Result<Option<S>> {
    STD.when_empty_directory(value, default)
}

/// See [`Paths::when_not_empty_directory`].
pub fn when_not_empty_directory<S: AsRef<str>>(
    value: Option<S>,
    default: Option<S>,
) -> Result<Option<S>> {
    STD.when_not_empty_directory(value, default)
}
