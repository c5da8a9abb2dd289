//! Error types shared across the scan, decode and placement stages.
//!
//! Only [`RunError`] is fatal. Everything produced while handling a single
//! file ends up inside that file's `PlacementResult` instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The source root could not be walked at all.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read source directory {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A file whose tags could not be decoded.
#[derive(Debug, Error)]
#[error("cannot read metadata from {}: {cause}", path.display())]
pub struct MetadataError {
    pub path: PathBuf,
    pub cause: String,
}

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single file ended up `Failed`.
#[derive(Debug, Error)]
pub enum FileError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("cannot prepare output directory: {0}")]
    Output(#[source] PlacementError),
}
