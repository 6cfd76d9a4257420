use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use ginmake_core::layout::{DEFAULT_DATABASE, DEFAULT_PORT, DIRECTORIES, FILES, Layout};
use ginmake_core::progress::{NoProgress, Stage};
use ginmake_core::generate;
use tempfile::TempDir;

use crate::util::{RecordingResolver, StageCounter, has_unresolved_placeholder, project, tree};

/// Full run with the canonical example name.
#[test]
fn generates_shopapi() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let resolver = RecordingResolver::default();
    let mut progress = StageCounter::default();

    let root: PathBuf = generate(
        &project("shopapi"),
        tmp.path(),
        &Layout::standard(),
        &mut progress,
        &resolver,
    )?;

    assert_eq!(root, tmp.path().join("shopapi"));
    for dir in DIRECTORIES {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
    }
    assert_eq!(DIRECTORIES.len(), 11);
    for file in FILES {
        assert!(root.join(file.path).is_file(), "missing file {}", file.path);
    }
    assert_eq!(FILES.iter().filter(|f| f.path != "go.mod").count(), 6);

    let yaml: String = fs::read_to_string(root.join("config/config.yaml"))?;
    assert!(yaml.contains("port: \":8000\""));
    assert!(yaml.contains("database: \"sqlite://app.db\""));

    let main: String = fs::read_to_string(root.join("cmd/main.go"))?;
    let imports: Vec<&str> = main
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with('"'))
        .collect();
    assert_eq!(imports, ["\"shopapi/config\"", "\"shopapi/internal/app\""]);

    assert_eq!(*resolver.calls.borrow(), vec![root.clone()]);
    assert_eq!(progress.started, [(Stage::Directories, 11), (Stage::Files, 7)]);
    assert_eq!(progress.advanced, 18);
    assert_eq!(progress.finished, 2);
    Ok(())
}

#[test]
fn creates_nothing_beyond_the_layout() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let root: PathBuf = generate(
        &project("inventory"),
        tmp.path(),
        &Layout::standard(),
        &mut NoProgress,
        &RecordingResolver::default(),
    )?;

    let mut expected: BTreeSet<String> = BTreeSet::new();
    for dir in DIRECTORIES {
        let mut prefix = String::new();
        for part in dir.split('/') {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(part);
            expected.insert(prefix.clone());
        }
    }
    for file in FILES {
        expected.insert(file.path.to_string());
    }

    assert_eq!(tree(&root), expected);

    let top: BTreeSet<String> = tree(tmp.path());
    assert!(top.iter().all(|p| p == "inventory" || p.starts_with("inventory/")));
    Ok(())
}

#[test]
fn rendered_files_have_no_placeholders() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let root: PathBuf = generate(
        &project("orders"),
        tmp.path(),
        &Layout::standard(),
        &mut NoProgress,
        &RecordingResolver::default(),
    )?;

    for file in FILES {
        let body: String = fs::read_to_string(root.join(file.path))?;
        assert!(!has_unresolved_placeholder(&body), "{} kept a token", file.path);
    }

    let routes: String = fs::read_to_string(root.join("internal/app/routes.go"))?;
    assert!(routes.contains("\"orders/internal/handlers\""));
    let go_mod: String = fs::read_to_string(root.join("go.mod"))?;
    assert!(go_mod.starts_with("module orders\n"));
    Ok(())
}

#[test]
fn config_defaults_do_not_depend_on_name() -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let mut seen: Vec<String> = Vec::new();

    for name in ["a", "billing", "port-8080"] {
        let root: PathBuf = generate(
            &project(name),
            tmp.path(),
            &Layout::standard(),
            &mut NoProgress,
            &RecordingResolver::default(),
        )?;
        seen.push(fs::read_to_string(root.join("config/config.yaml"))?);
    }

    assert!(seen.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(
        seen[0],
        format!("port: \"{DEFAULT_PORT}\"\ndatabase: \"{DEFAULT_DATABASE}\"\n")
    );
    Ok(())
}
