use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Location of a file-backed store.
// FUTURE maybe this should be a url?
#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash
)]
pub struct Source(PathBuf);

impl FromStr for Source {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Source(PathBuf::from(s)))
    }
}

impl Source {
    /// Use for sources that must already exist, e.g. inputs.
    pub fn try_from_path(path: PathBuf) -> Result<Source, SourceError> {
        if !path.exists() {
            return Err(SourceError::PathDoesNotExist(path));
        }
        if !path.is_file() {
            return Err(SourceError::PathIsNotAFile(path));
        }
        Ok(Source(path))
    }

    /// Use for sources that do not exist yet, e.g. outputs.
    pub fn from_absolute_path(path: PathBuf) -> Result<Source, SourceError> {
        assert!(path.is_absolute());
        Ok(Source(path))
    }

    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.display().to_string().as_str())
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Path does not exist. path: {0}")]
    PathDoesNotExist(PathBuf),
    #[error("Path is not a file. path: {0}")]
    PathIsNotAFile(PathBuf),
}
