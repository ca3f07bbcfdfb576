//! Aggregate statistics over a scan result.

use serde::Serialize;

use crate::duplicates::ScanResult;

/// Aggregate counts for a scan's duplicate groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of duplicate groups
    pub group_count: usize,
    /// Removable copies: total members across groups minus one
    /// representative per group
    pub duplicate_count: usize,
    /// Bytes freed by removing every removable copy
    pub reclaimable_bytes: u64,
}

/// Re-derive summary statistics from the group sequence.
///
/// Pure computation with no side effects. The same figures are carried on
/// [`ScanResult`], but deriving them here keeps the computation separable
/// and independently testable.
#[must_use]
pub fn summarize(result: &ScanResult) -> Summary {
    let mut summary = Summary {
        group_count: result.groups.len(),
        ..Default::default()
    };
    for group in &result.groups {
        summary.duplicate_count += group.duplicate_count();
        summary.reclaimable_bytes += group.reclaimable_bytes();
    }
    summary
}
