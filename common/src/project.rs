//! # Project Name
//!
//! The name is used verbatim twice: as the root directory (relative to the
//! working directory) and as the Go module path in every generated import.
//! No escaping is done; whatever the filesystem accepts is accepted.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::GenerateError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(GenerateError::InvalidProjectName);
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ProjectName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}
