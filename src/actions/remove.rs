//! Removal of redundant copies from a duplicate group.
//!
//! # Overview
//!
//! [`remove`] deletes every member of a group except a caller-chosen
//! representative. Deletion is either permanent (`fs::remove_file`, the
//! default) or a move to the system trash via the `trash` crate.
//!
//! # Safety
//!
//! The kept file is never touched. Per-file failures are collected into the
//! report and the batch continues; a single failure never aborts the
//! remaining deletions. Callers are responsible for obtaining confirmation
//! before invoking removal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::duplicates::DuplicateGroup;

/// The caller-supplied keep path is not a member of the group.
///
/// Fatal to that `remove` call only; nothing is deleted.
#[derive(Debug, Error)]
#[error("keep path is not a member of the group: {0}")]
pub struct SelectionError(pub PathBuf);

/// Per-file errors during removal.
///
/// Non-fatal to the batch; collected into [`RemovalReport::failed`].
#[derive(Debug, Error)]
pub enum DeletionError {
    /// File was already gone when removal was attempted.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Trash operation failed.
    #[error("trash operation failed for {path}: {message}")]
    TrashFailed {
        /// Path that could not be trashed
        path: PathBuf,
        /// Message from the trash backend
        message: String,
    },

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl DeletionError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
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
            Self::TrashFailed { path, .. } | Self::Io { path, .. } => path,
        }
    }
}

/// Deletion mechanism for removed copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalMode {
    /// Permanently delete with `fs::remove_file` (irreversible).
    Permanent,
    /// Move to the system trash (recoverable).
    Trash,
}

/// Configuration for removal operations.
#[derive(Debug, Clone)]
pub struct RemovalConfig {
    /// Deletion mechanism to use.
    pub mode: RemovalMode,
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self {
            mode: RemovalMode::Permanent,
        }
    }
}

impl RemovalConfig {
    /// Config for permanent deletion.
    #[must_use]
    pub fn permanent() -> Self {
        Self::default()
    }

    /// Config for deletion to the system trash.
    #[must_use]
    pub fn trash() -> Self {
        Self {
            mode: RemovalMode::Trash,
        }
    }
}

/// A removal that failed, with its error.
#[derive(Debug)]
pub struct RemovalFailure {
    /// Path that could not be removed
    pub path: PathBuf,
    /// Why removal failed
    pub error: DeletionError,
}

/// Report of a removal batch over one group.
#[derive(Debug, Default)]
pub struct RemovalReport {
    /// The representative that was kept
    pub kept: PathBuf,
    /// Paths successfully removed
    pub removed: Vec<PathBuf>,
    /// Paths that could not be removed, with their errors
    pub failed: Vec<RemovalFailure>,
    /// Total bytes freed by successful removals
    pub bytes_freed: u64,
}

impl RemovalReport {
    fn new(kept: PathBuf) -> Self {
        Self {
            kept,
            ..Default::default()
        }
    }

    /// Number of successful removals.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Number of failed removals.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Whether every non-kept member was successfully removed.
    #[must_use]
    pub fn fully_cleaned(&self) -> bool {
        self.failed.is_empty()
    }

    /// Human-readable summary of the batch.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.fully_cleaned() {
            format!(
                "Removed {} file(s), freed {} bytes",
                self.removed_count(),
                self.bytes_freed
            )
        } else {
            format!(
                "Removed {} file(s), {} failed, freed {} bytes",
                self.removed_count(),
                self.failed_count(),
                self.bytes_freed
            )
        }
    }
}

/// Remove every member of a group except the chosen representative.
///
/// # Arguments
///
/// * `group` - The duplicate group to clean
/// * `keep` - Member path to preserve; must belong to the group
/// * `config` - Deletion mechanism
///
/// # Errors
///
/// Returns [`SelectionError`] if `keep` is not a member of the group. In
/// that case nothing is deleted. Individual deletion failures are *not*
/// errors: they are collected into the report and the batch continues.
///
/// # Example
///
/// ```no_run
/// use dupelens::actions::{remove, RemovalConfig};
/// use dupelens::duplicates::DuplicateGroup;
///
/// # let group: DuplicateGroup = todo!();
/// let keep = group.paths[0].clone();
/// let report = remove(&group, &keep, &RemovalConfig::default()).unwrap();
/// assert!(!report.removed.contains(&keep));
/// ```
pub fn remove(
    group: &DuplicateGroup,
    keep: &Path,
    config: &RemovalConfig,
) -> Result<RemovalReport, SelectionError> {
    if !group.contains(keep) {
        return Err(SelectionError(keep.to_path_buf()));
    }

    let mut report = RemovalReport::new(keep.to_path_buf());

    for path in &group.paths {
        if path.as_path() == keep {
            continue;
        }
        match delete_one(path, config.mode) {
            Ok(size) => {
                log::info!("Removed duplicate: {} ({} bytes)", path.display(), size);
                report.bytes_freed += size;
                report.removed.push(path.clone());
            }
            Err(error) => {
                // One failure never aborts the batch.
                log::warn!("Failed to remove {}: {}", path.display(), error);
                report.failed.push(RemovalFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    Ok(report)
}

/// Delete one file, returning its size on success.
fn delete_one(path: &Path, mode: RemovalMode) -> Result<u64, DeletionError> {
    let metadata = fs::metadata(path).map_err(|e| DeletionError::from_io(path, e))?;
    let size = metadata.len();

    match mode {
        RemovalMode::Permanent => {
            fs::remove_file(path).map_err(|e| DeletionError::from_io(path, e))?;
        }
        RemovalMode::Trash => {
            trash::delete(path).map_err(|e| DeletionError::TrashFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    Ok(size)
}
