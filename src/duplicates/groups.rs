//! Duplicate group and scan result types.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::scanner::{fingerprint_to_hex, Fingerprint, ReadError};

/// Confirmed group of byte-identical files.
///
/// Invariants: every member shares the group fingerprint and size, no path
/// appears twice within a group, and a path belongs to at most one group per
/// scan. Groups always have at least two members; singletons are never
/// materialized.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateGroup {
    /// BLAKE3 content fingerprint shared by every member (32 bytes)
    pub fingerprint: Fingerprint,
    /// File size in bytes, shared by every member
    pub size: u64,
    /// Member paths in discovery order
    pub paths: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    #[must_use]
    pub fn new(fingerprint: Fingerprint, size: u64, paths: Vec<PathBuf>) -> Self {
        Self {
            fingerprint,
            size,
            paths,
        }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Removable copies: every member beyond the first.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }

    /// Bytes freed if all but one member were removed.
    #[must_use]
    pub fn reclaimable_bytes(&self) -> u64 {
        self.size * self.duplicate_count() as u64
    }

    /// Check whether a path is a member of this group.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p.as_path() == path)
    }

    /// Fingerprint as a hexadecimal string.
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        fingerprint_to_hex(&self.fingerprint)
    }
}

/// Result of one scan.
///
/// Owned by the caller once returned; created fresh per scan with no
/// persistent identity across scans. Groups appear in discovery order of
/// their first member.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Duplicate groups in discovery order of their first member
    pub groups: Vec<DuplicateGroup>,
    /// Total regular files discovered under the root
    pub total_files: usize,
    /// Removable copies across all groups (members beyond the first)
    pub duplicate_files: usize,
    /// Total bytes freed by removing every removable copy
    pub reclaimable_bytes: u64,
    /// Per-file errors encountered; those files were excluded from grouping
    pub warnings: Vec<ReadError>,
    /// True when the scan was cancelled before fingerprinting every file
    pub interrupted: bool,
    /// Wall-clock duration of the scan
    pub scan_duration: Duration,
}

impl ScanResult {
    /// Number of duplicate groups found.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of files skipped due to read failures.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Whether this result covers only part of the tree (cancelled scan).
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.interrupted
    }
}
