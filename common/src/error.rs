//! # Generation errors
//!
//! Every stage of the pipeline fails with exactly one of these variants and
//! nothing is retried or rolled back. Paths carried by the variants are the
//! full paths the stage tried to touch.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The project name was empty or only whitespace.
    #[error("project name must not be empty")]
    InvalidProjectName,

    /// The root could not be created, usually because it already exists.
    #[error("cannot create project root '{}': {source}", path.display())]
    RootDirectoryExists {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create directory '{}': {source}", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write file '{}': {source}", path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot enter '{}': {source}", path.display())]
    WorkingDirectoryChangeFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed: {source}")]
    DependencyResolutionFailed {
        command: String,
        #[source]
        source: ResolverFailure,
    },
}

/// Why the external resolver did not succeed.
#[derive(Debug, Error)]
pub enum ResolverFailure {
    /// The binary could not be started at all (e.g. not on `PATH`).
    #[error("could not launch: {0}")]
    Launch(#[source] io::Error),

    #[error("{status}{}", stderr_suffix(.stderr))]
    Exit { status: ExitStatus, stderr: String },
}

fn stderr_suffix(stderr: &str) -> String {
    match stderr.lines().rev().find(|line| !line.trim().is_empty()) {
        Some(line) => format!(" ({})", line.trim()),
        None => String::new(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
