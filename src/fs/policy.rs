//! Structural rules for path strings.

/// Decides whether a non-blank string is structurally a valid path.
///
/// Absent, empty and blank strings are rejected before a policy is asked,
/// so implementations only see strings with visible content. Every method
/// has a default, so a custom policy overrides just the rule it tightens.
///
/// # Example
///
/// ```rust
/// use argguard::fs::{Paths, PathPolicy, StdFileSystem};
///
/// struct NoSpaces;
///
/// impl PathPolicy for NoSpaces {
///     fn is_valid_file_name(&self, name: &str) -> bool {
///         !name.contains(' ')
///     }
/// }
///
/// let paths = Paths::new(StdFileSystem, NoSpaces);
/// assert!(paths.is_valid_file_name(Some("report.txt")));
/// assert!(!paths.is_valid_file_name(Some("my report.txt")));
/// ```
pub trait PathPolicy: Send + Sync {
    /// Whether `path` may name a directory. Accepts everything by default.
    fn is_valid_directory_path(&self, path: &str) -> bool {
        let _ = path;
        true
    }

    /// Whether `path` may name a file. Accepts everything by default.
    fn is_valid_file_path(&self, path: &str) -> bool {
        let _ = path;
        true
    }

    /// Whether `name` is a bare file name.
    ///
    /// By default a name may not contain a path separator (`/` or `\`) or
    /// a NUL byte.
    fn is_valid_file_name(&self, name: &str) -> bool {
        !name.contains(['/', '\\', '\0'])
    }
}

/// The permissive rules: any path, and file names without separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultPathPolicy;

impl PathPolicy for DefaultPathPolicy {}
