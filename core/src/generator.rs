//! The generation pipeline.
//!
//! Four stages run strictly in order and the first failure is returned as
//! is. Nothing is rolled back: a failed run leaves whatever it already
//! created, and the next run stops at [`create_root`] because the root
//! exists.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ginmake_common::error::GenerateError;
use ginmake_common::project::ProjectName;
use ginmake_common::{info, success};
use tracing::debug;

use crate::layout::{FileTemplate, Layout};
use crate::progress::{ProgressSink, Stage};
use crate::resolver::DependencyResolver;
use crate::template;

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Generates project `name` under `parent` and returns the project root.
pub fn generate(
    name: &ProjectName,
    parent: &Path,
    layout: &Layout<'_>,
    progress: &mut dyn ProgressSink,
    resolver: &dyn DependencyResolver,
) -> Result<PathBuf, GenerateError> {
    info!("Starting generation of project '{name}'");

    let root: PathBuf = create_root(parent, name)?;
    build_directories(&root, layout.directories, progress)?;
    emit_files(&root, name, layout.files, progress)?;
    resolve_dependencies(&root, resolver)?;

    Ok(root)
}

/// Creates the empty project root. Fails if anything already sits at that path.
pub fn create_root(parent: &Path, name: &ProjectName) -> Result<PathBuf, GenerateError> {
    let root: PathBuf = parent.join(name);

    dir_builder(false)
        .create(&root)
        .map_err(|source| GenerateError::RootDirectoryExists {
            path: root.clone(),
            source,
        })?;

    success!("Created project root {}", root.display());
    Ok(root)
}

pub fn build_directories(
    root: &Path,
    directories: &[&str],
    progress: &mut dyn ProgressSink,
) -> Result<(), GenerateError> {
    progress.start(Stage::Directories, directories.len());

    for dir in directories {
        let path: PathBuf = root.join(dir);
        if let Err(source) = dir_builder(true).create(&path) {
            progress.finish();
            return Err(GenerateError::DirectoryCreationFailed { path, source });
        }
        debug!(path = %path.display(), "directory created");
        progress.advance(dir);
    }

    progress.finish();
    success!("Created {} directories", directories.len());
    Ok(())
}

pub fn emit_files(
    root: &Path,
    name: &ProjectName,
    files: &[FileTemplate],
    progress: &mut dyn ProgressSink,
) -> Result<(), GenerateError> {
    progress.start(Stage::Files, files.len());

    for file in files {
        let path: PathBuf = root.join(file.path);
        let contents: String = template::render(file.body, name.as_str());
        if let Err(source) = write_file(&path, contents.as_bytes()) {
            progress.finish();
            return Err(GenerateError::FileWriteFailed { path, source });
        }
        debug!(path = %path.display(), bytes = contents.len(), "file written");
        progress.advance(file.path);
    }

    progress.finish();
    success!("Wrote {} files", files.len());
    Ok(())
}

pub fn resolve_dependencies(
    root: &Path,
    resolver: &dyn DependencyResolver,
) -> Result<(), GenerateError> {
    info!("Running {} in {}", resolver.describe(), root.display());
    resolver.resolve(root)?;
    success!("Dependencies resolved");
    Ok(())
}

fn dir_builder(recursive: bool) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    let mut file: fs::File = options.open(path)?;
    file.write_all(contents)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
