/// Fatal errors for a sort run.
///
/// Only problems with the sort root abort a run. Everything that goes wrong
/// with an individual file or subdirectory is recorded in the report instead
/// (see [`crate::model::FailureKind`]).
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("sort root not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("sort root is not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("cannot read sort root {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SortError {
    /// Classify an I/O error raised while opening the root.
    pub(crate) fn from_root_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::RootNotFound { path }
        } else {
            Self::RootUnreadable { path, source }
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::RootNotFound { path }
            | Self::RootNotDirectory { path }
            | Self::RootUnreadable { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
