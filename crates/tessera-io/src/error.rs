//! Errors from instance loading and export.

use std::error::Error;
use std::fmt;
use std::io;

use tessera_core::Cell;

/// Errors from deserializing an instance document.
#[derive(Debug)]
pub enum LoadError {
    /// The document's `_version` is newer than this implementation.
    BadVersion(u32),
    /// Two cube entries name the same cell.
    DuplicateCell(Cell),
    /// The cubes do not form one 4-connected configuration.
    Disconnected,
    /// The document is not valid JSON for the instance schema.
    Json(serde_json::Error),
    /// The underlying reader or writer failed.
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadVersion(v) => write!(f, "unknown instance version {v}"),
            Self::DuplicateCell(cell) => write!(f, "duplicate cube at {cell}"),
            Self::Disconnected => write!(f, "instance is not 4-connected"),
            Self::Json(err) => write!(f, "malformed instance: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
