//! Scanner module for directory traversal and content fingerprinting.
//!
//! This module provides:
//! - [`walker`]: deterministic directory traversal (lexicographically sorted
//!   entries, regular files only)
//! - [`fingerprint`]: streaming BLAKE3 fingerprinting in fixed-size blocks
//!
//! # Example
//!
//! ```no_run
//! use dupelens::scanner::{Fingerprinter, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."));
//! let fingerprinter = Fingerprinter::new();
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(record) => {
//!             let digest = fingerprinter.fingerprint(&record.path);
//!             println!("{}: {:?}", record.path.display(), digest);
//!         }
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod fingerprint;
pub mod walker;

use std::path::{Path, PathBuf};

// Re-export main types
pub use fingerprint::{fingerprint_to_hex, Fingerprint, Fingerprinter, BLOCK_SIZE};
pub use walker::Walker;

/// Metadata for a regular file discovered during traversal.
///
/// Records are transient: they exist only between traversal and grouping.
/// Paths of confirmed duplicates are retained in the output groups.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Absolute path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl FileRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Fatal errors for a whole scan call: the root path is unusable.
///
/// Nothing partial is returned when the root itself is invalid.
#[derive(thiserror::Error, Debug)]
pub enum PathError {
    /// The root path does not exist.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The root path exists but is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Per-file errors during traversal or fingerprinting.
///
/// These are never fatal to a scan: the file is excluded from grouping and
/// the error is recorded as a warning on the result.
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// The file vanished between listing and read.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when opening or reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while accessing the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ReadError {
    /// Classify an I/O error against the path it occurred on.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// The path this error occurred on.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) => p,
            Self::Io { path, .. } => path,
        }
    }
}
