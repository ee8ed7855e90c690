use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Represents a fatal error which can occur while generating a gallery.
///
/// Every filesystem variant carries the path involved and the message of the underlying OS error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The image folder could not be created.
    CreateFolder(PathBuf, String),
    /// The image folder could not be read.
    ReadFolder(PathBuf, String),
    /// The configuration file could not be read.
    ReadConfig(PathBuf, String),
    /// The default configuration file could not be written.
    WriteConfig(PathBuf, String),
    /// The output file could not be created.
    CreateOutput(PathBuf, String),
    /// The output file could not be written or flushed.
    WriteOutput(PathBuf, String),

    /// The gallery has not yet been built, but its images are required for this operation.
    NotBuilt,
}

impl Error {
    /// Returns the path involved in the error, if there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::CreateFolder(path, _)
            | Self::ReadFolder(path, _)
            | Self::ReadConfig(path, _)
            | Self::WriteConfig(path, _)
            | Self::CreateOutput(path, _)
            | Self::WriteOutput(path, _) => Some(path),
            Self::NotBuilt => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateFolder(path, e) => write!(f, "failed to create {}: {}", path.display(), e),
            Self::ReadFolder(path, e) => write!(f, "failed to read {}: {}", path.display(), e),
            Self::ReadConfig(path, e) => {
                write!(f, "failed to read config file {}: {}", path.display(), e)
            }
            Self::WriteConfig(path, e) => {
                write!(f, "failed to create default config {}: {}", path.display(), e)
            }
            Self::CreateOutput(path, e) => write!(f, "failed to create {}: {}", path.display(), e),
            Self::WriteOutput(path, e) => write!(f, "failed to write {}: {}", path.display(), e),
            Self::NotBuilt => write!(f, "the gallery has not been built"),
        }
    }
}

impl std::error::Error for Error {}
