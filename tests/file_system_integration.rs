//! Path checks against real directories

use argguard::fs::{self, DefaultPathPolicy, Paths, StdFileSystem};
use argguard::{assert_guard_err, assert_guard_ok};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, relative: &str) -> String {
        self.dir.path().join(relative).to_str().unwrap().to_string()
    }

    fn root(&self) -> String {
        self.dir.path().to_str().unwrap().to_string()
    }
}

#[test]
fn test_directory_lifecycle() {
    let ws = Workspace::new();
    let logs = ws.path("logs");

    assert_eq!(fs::does_directory_exist(Some(logs.as_str())), Ok(false));
    assert_eq!(fs::is_empty_directory(Some(logs.as_str())), Ok(true));
    assert_guard_ok!(fs::cannot_exist_directory(Some(logs.as_str())), Some(logs.as_str()));

    std::fs::create_dir(&logs).unwrap();
    assert_guard_ok!(fs::must_exist_directory(Some(logs.as_str())), Some(logs.as_str()));
    assert_guard_ok!(fs::must_be_empty_directory(Some(logs.as_str())), Some(logs.as_str()));

    std::fs::write(ws.path("logs/app.log"), b"started").unwrap();
    assert_guard_err!(
        fs::must_be_empty_directory(Some(logs.as_str())),
        "Value must be an empty directory."
    );
    assert_guard_ok!(fs::cannot_be_empty_directory(Some(logs.as_str())), Some(logs.as_str()));
}

#[test]
fn test_file_existence() {
    let ws = Workspace::new();
    let config = ws.path("config.toml");

    assert_guard_err!(
        fs::must_exist_file(Some(config.clone())),
        "Value must be an existing file."
    );
    assert_eq!(
        fs::when_file_exists_not(Some(config.as_str()), Some("defaults.toml")),
        Ok(Some("defaults.toml"))
    );

    std::fs::write(&config, b"debug = true").unwrap();
    assert_guard_ok!(fs::must_exist_file(Some(config.clone())), Some(config.clone()));
    assert_guard_err!(
        fs::cannot_exist_file(Some(config.as_str())),
        "Value cannot be an existing file."
    );
    assert_eq!(
        fs::when_file_exists(Some(config.as_str()), Some("other.toml")),
        Ok(Some("other.toml"))
    );
}

#[test]
fn test_listing_a_file_is_an_error() {
    let ws = Workspace::new();
    let file = ws.path("notes.txt");
    std::fs::write(&file, b"x").unwrap();

    let err = fs::is_empty_directory(Some(file.as_str())).unwrap_err();
    assert!(err.message().starts_with("Value could not be listed as a directory"));
}

#[test]
fn test_invalid_paths_fail_before_probing() {
    assert_guard_err!(fs::does_directory_exist(None), "Value cannot be null.");
    assert_guard_err!(fs::does_file_exist(Some("")), "Value cannot be empty.");
    assert_guard_err!(fs::is_empty_directory(Some("\t")), "Value cannot be blank.");
    assert_guard_err!(
        fs::when_directory_exists(Some(" "), Some("/tmp")),
        "Value cannot be blank."
    );
}

#[test]
fn test_absolute_paths() {
    let ws = Workspace::new();
    let root = ws.root();

    assert!(fs::is_absolute_path(Some(root.as_str())));
    assert!(fs::is_absolute_path(None));
    assert!(!fs::is_absolute_path(Some("relative/dir")));
    assert_guard_ok!(fs::must_be_absolute_path(Some(root.as_str())), Some(root.as_str()));
    assert_guard_ok!(fs::cannot_be_absolute_path(Some("relative/dir")), Some("relative/dir"));
    assert_eq!(
        fs::when_not_absolute_path(Some("relative/dir"), Some(root.as_str())),
        Some(root.as_str())
    );
}

#[test]
fn test_explicit_context_matches_free_functions() {
    let ws = Workspace::new();
    let root = ws.root();
    let paths = Paths::new(StdFileSystem, DefaultPathPolicy);

    assert_eq!(
        paths.does_directory_exist(Some(root.as_str())),
        fs::does_directory_exist(Some(root.as_str()))
    );
    assert_eq!(
        paths.is_empty_directory(Some(root.as_str())),
        fs::is_empty_directory(Some(root.as_str()))
    );
    assert_eq!(
        paths.when_empty_directory(Some(root.as_str()), Some("/elsewhere")),
        Ok(Some("/elsewhere"))
    );
    assert_eq!(
        paths.when_not_empty_directory(Some(root.as_str()), Some("/elsewhere")),
        Ok(Some(root.as_str()))
    );
}
