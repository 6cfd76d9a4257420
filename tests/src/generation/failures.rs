use std::fs;
use std::path::{Path, PathBuf};

use ginmake_common::error::GenerateError;
use ginmake_core::layout::{DIRECTORIES, FILES, FileTemplate, Layout};
use ginmake_core::progress::{NoProgress, Stage};
use ginmake_core::resolver::{DependencyResolver, GoModTidy};
use ginmake_core::generate;
use tempfile::TempDir;

use crate::util::{RecordingResolver, StageCounter, project, tree};

#[test]
fn existing_root_is_never_touched() {
    let tmp = TempDir::new().unwrap();
    let root: PathBuf = tmp.path().join("shopapi");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("keep.txt"), "mine").unwrap();
    let resolver = RecordingResolver::default();
    let mut progress = StageCounter::default();

    let result = generate(
        &project("shopapi"),
        tmp.path(),
        &Layout::standard(),
        &mut progress,
        &resolver,
    );

    assert!(matches!(result, Err(GenerateError::RootDirectoryExists { .. })));
    assert_eq!(tree(&root).into_iter().collect::<Vec<_>>(), ["keep.txt"]);
    assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "mine");
    assert!(progress.started.is_empty());
    assert!(resolver.calls.borrow().is_empty());
}

#[test]
fn second_run_fails_at_the_root() {
    let tmp = TempDir::new().unwrap();
    let first = generate(
        &project("shopapi"),
        tmp.path(),
        &Layout::standard(),
        &mut NoProgress,
        &RecordingResolver::default(),
    );
    assert!(first.is_ok());

    let second = generate(
        &project("shopapi"),
        tmp.path(),
        &Layout::standard(),
        &mut NoProgress,
        &RecordingResolver::default(),
    );
    assert!(matches!(second, Err(GenerateError::RootDirectoryExists { .. })));
}

#[test]
fn directory_failure_on_third_entry_aborts_before_files() {
    let tmp = TempDir::new().unwrap();
    let mut dirs: Vec<&str> = DIRECTORIES.to_vec();
    // NUL bytes are refused by the OS even when running as root.
    dirs[2] = "internal/\0app";
    let layout = Layout {
        directories: &dirs,
        files: FILES,
    };
    let resolver = RecordingResolver::default();
    let mut progress = StageCounter::default();

    let result = generate(&project("shopapi"), tmp.path(), &layout, &mut progress, &resolver);

    assert!(matches!(result, Err(GenerateError::DirectoryCreationFailed { .. })));
    let root: &Path = &tmp.path().join("shopapi");
    assert!(root.join("cmd").is_dir());
    assert!(root.join("config").is_dir());
    for dir in &DIRECTORIES[3..] {
        assert!(!root.join(dir).exists(), "{dir} should not exist");
    }
    for file in FILES {
        assert!(!root.join(file.path).exists(), "{} should not exist", file.path);
    }
    assert_eq!(progress.started, [(Stage::Directories, 11)]);
    assert_eq!(progress.advanced, 2);
    assert!(resolver.calls.borrow().is_empty());
}

#[test]
fn file_failure_keeps_earlier_files_and_skips_resolver() {
    let tmp = TempDir::new().unwrap();
    let files = [
        FILES[0],
        FileTemplate {
            path: "vendor/modules.txt",
            body: "# {{module}}\n",
        },
        FILES[6],
    ];
    let layout = Layout {
        directories: DIRECTORIES,
        files: &files,
    };
    let resolver = RecordingResolver::default();

    let result = generate(&project("shopapi"), tmp.path(), &layout, &mut NoProgress, &resolver);

    match result {
        Err(GenerateError::FileWriteFailed { path, .. }) => {
            assert!(path.ends_with("vendor/modules.txt"));
        }
        other => panic!("expected FileWriteFailed, got {other:?}"),
    }
    let root: PathBuf = tmp.path().join("shopapi");
    assert!(root.join("cmd/main.go").is_file());
    assert!(!root.join("go.mod").exists());
    assert!(resolver.calls.borrow().is_empty());
}

#[test]
fn resolver_failure_leaves_complete_tree() {
    let tmp = TempDir::new().unwrap();
    let resolver = GoModTidy::new("ginmake-missing-go");
    assert_eq!(resolver.describe(), "ginmake-missing-go mod tidy");

    let result = generate(
        &project("shopapi"),
        tmp.path(),
        &Layout::standard(),
        &mut NoProgress,
        &resolver,
    );

    assert!(matches!(
        result,
        Err(GenerateError::DependencyResolutionFailed { .. })
    ));
    let root: PathBuf = tmp.path().join("shopapi");
    for file in FILES {
        assert!(root.join(file.path).is_file());
    }
}
