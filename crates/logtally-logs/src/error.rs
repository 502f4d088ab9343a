use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A line that does not fit `DATE TIME LEVEL MESSAGE...`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed log line: expected 4 fields, found {fields}")]
    Malformed { fields: usize },
}

/// Failure to turn a file into records
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("log file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read log file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("log file {} is not valid UTF-8 (line {line})", .path.display())]
    Encoding { path: PathBuf, line: usize },
}

/// Coarse classification of a [`LoadError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    FileAccess,
    Encoding,
}

impl LoadError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::NotFound { .. } | Self::Io { .. } => LoadErrorKind::FileAccess,
            Self::Encoding { .. } => LoadErrorKind::Encoding,
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } | Self::Encoding { path, .. } => path,
        }
    }
}
