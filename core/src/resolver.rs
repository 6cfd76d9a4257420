//! Dependency resolution port.
//!
//! Resolvers get the project root as an explicit argument and run inside
//! it; the process working directory is never changed.

use std::path::Path;
use std::process::{Command, Output};

use ginmake_common::config::Config;
use ginmake_common::error::{GenerateError, ResolverFailure};
use tracing::debug;

pub trait DependencyResolver {
    /// Command line shown to the user, e.g. `go mod tidy`.
    fn describe(&self) -> String;

    /// Fetches and locks the dependencies declared under `dir`.
    fn resolve(&self, dir: &Path) -> Result<(), GenerateError>;
}

/// Builds the resolver selected by `cfg`.
pub fn from_config(cfg: &Config) -> Box<dyn DependencyResolver> {
    if cfg.skip_resolve {
        Box::new(SkipResolve)
    } else {
        Box::new(GoModTidy::new(cfg.go_binary.clone()))
    }
}

/// Runs `<go> mod tidy` inside the project root.
#[derive(Clone, Debug)]
pub struct GoModTidy {
    go_binary: String,
}

impl GoModTidy {
    pub fn new(go_binary: impl Into<String>) -> Self {
        Self {
            go_binary: go_binary.into(),
        }
    }
}

impl DependencyResolver for GoModTidy {
    fn describe(&self) -> String {
        format!("{} mod tidy", self.go_binary)
    }

    fn resolve(&self, dir: &Path) -> Result<(), GenerateError> {
        ensure_enterable(dir)?;

        let output: Output = Command::new(&self.go_binary)
            .args(["mod", "tidy"])
            .current_dir(dir)
            .output()
            .map_err(|e| GenerateError::DependencyResolutionFailed {
                command: self.describe(),
                source: ResolverFailure::Launch(e),
            })?;

        if !output.status.success() {
            return Err(GenerateError::DependencyResolutionFailed {
                command: self.describe(),
                source: ResolverFailure::Exit {
                    status: output.status,
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                },
            });
        }

        debug!(dir = %dir.display(), "{} finished", self.describe());
        Ok(())
    }
}

/// Leaves dependencies unresolved.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkipResolve;

impl DependencyResolver for SkipResolve {
    fn describe(&self) -> String {
        String::from("skip")
    }

    fn resolve(&self, dir: &Path) -> Result<(), GenerateError> {
        ensure_enterable(dir)
    }
}

/// Fails with `WorkingDirectoryChangeFailed` unless `dir` is a directory
/// whose entries we are allowed to list.
pub fn ensure_enterable(dir: &Path) -> Result<(), GenerateError> {
    std::fs::read_dir(dir)
        .map(|_| ())
        .map_err(|source| GenerateError::WorkingDirectoryChangeFailed {
            path: dir.to_path_buf(),
            source,
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
