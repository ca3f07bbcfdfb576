//! Scan orchestration: traversal, parallel fingerprinting, grouping.
//!
//! # Overview
//!
//! The [`Engine`] runs the full detection pipeline:
//! 1. **Walk** - collect every regular file under the root in deterministic
//!    (lexicographic per-directory) discovery order
//! 2. **Fingerprint** - stream a BLAKE3 digest per file on a bounded rayon
//!    pool
//! 3. **Group** - bucket paths by exact digest, discarding singletons
//!
//! # Determinism
//!
//! Fingerprints are computed in parallel, but results are collected in
//! discovery order (rayon's indexed collect) and grouped by a single
//! coordinating thread. Member order within a group and group order across
//! the result therefore match discovery order for any thread count, and no
//! two workers ever race on a bucket.
//!
//! # Example
//!
//! ```no_run
//! use dupelens::duplicates::{Engine, EngineConfig};
//! use std::path::Path;
//!
//! let engine = Engine::new(EngineConfig::default().with_io_threads(4));
//! let result = engine.scan(Path::new("/some/path")).unwrap();
//!
//! println!("Found {} duplicate groups", result.group_count());
//! println!("Reclaimable: {} bytes", result.reclaimable_bytes);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use super::groups::{DuplicateGroup, ScanResult};
use crate::scanner::{FileRecord, Fingerprint, Fingerprinter, PathError, ReadError, Walker};

/// Default number of fingerprinting threads.
///
/// Kept low to prevent disk thrashing; shared with the CLI's `--threads`
/// default.
pub const DEFAULT_IO_THREADS: usize = 4;

/// Configuration for the scan engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of I/O threads for parallel fingerprinting.
    pub io_threads: usize,
    /// Optional cancellation flag checked between files.
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            io_threads: DEFAULT_IO_THREADS,
            cancel_flag: None,
        }
    }
}

impl EngineConfig {
    /// Set the I/O thread count (clamped to at least 1).
    #[must_use]
    pub fn with_io_threads(mut self, threads: usize) -> Self {
        self.io_threads = threads.max(1);
        self
    }

    /// Set the cancellation flag.
    ///
    /// When the flag becomes `true`, files not yet fingerprinted are skipped
    /// and the scan returns a partial result with `interrupted` set.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Check if cancellation has been requested.
    fn is_cancel_requested(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::SeqCst))
    }
}

/// Duplicate scan engine.
pub struct Engine {
    config: EngineConfig,
    fingerprinter: Fingerprinter,
}

impl Engine {
    /// Create a new engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            fingerprinter: Fingerprinter::new(),
        }
    }

    /// Create a new engine with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Scan a directory tree for byte-identical files.
    ///
    /// Per-file read failures are collected as warnings on the result and
    /// never abort the scan. Only a structurally invalid root is a hard
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] if the root does not exist or is not a
    /// directory; nothing partial is returned in that case.
    pub fn scan(&self, root: &Path) -> Result<ScanResult, PathError> {
        let start = Instant::now();

        if !root.exists() {
            return Err(PathError::NotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(PathError::NotADirectory(root.to_path_buf()));
        }

        log::info!("Scanning {} for duplicates", root.display());

        let mut result = ScanResult::default();

        // Traversal completes before fingerprinting starts so every record
        // has a stable discovery index.
        let walker = Walker::new(root);
        let mut records: Vec<FileRecord> = Vec::new();
        for entry in walker.walk() {
            match entry {
                Ok(record) => records.push(record),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    result.warnings.push(e);
                }
            }
        }
        result.total_files = records.len();
        log::info!("Discovered {} files", records.len());

        let outcomes = self.fingerprint_all(records);
        self.group(outcomes, &mut result);

        result.scan_duration = start.elapsed();

        if result.interrupted {
            log::info!("Scan cancelled; returning partial results");
        }
        log::info!(
            "Scan complete: {} groups, {} removable duplicates, {} bytes reclaimable in {:.2?}",
            result.group_count(),
            result.duplicate_files,
            result.reclaimable_bytes,
            result.scan_duration
        );

        Ok(result)
    }

    /// Fingerprint every record on a bounded pool, preserving discovery order.
    ///
    /// `None` marks a file skipped by cancellation.
    #[allow(clippy::type_complexity)]
    fn fingerprint_all(
        &self,
        records: Vec<FileRecord>,
    ) -> Vec<(FileRecord, Option<Result<Fingerprint, ReadError>>)> {
        if records.is_empty() {
            return Vec::new();
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.io_threads)
            .build()
            .unwrap_or_else(|_| {
                log::warn!(
                    "Failed to create custom thread pool, using global pool with {} threads",
                    rayon::current_num_threads()
                );
                rayon::ThreadPoolBuilder::new().build().unwrap()
            });

        pool.install(|| {
            records
                .into_par_iter()
                .map(|record| {
                    // Cancellation is checked between files, never mid-read.
                    if self.config.is_cancel_requested() {
                        return (record, None);
                    }
                    let digest = self.fingerprinter.fingerprint(&record.path);
                    if let Ok(ref d) = digest {
                        log::trace!(
                            "Fingerprinted {}: {}",
                            record.path.display(),
                            crate::scanner::fingerprint_to_hex(d)
                        );
                    }
                    (record, Some(digest))
                })
                .collect()
        })
    }

    /// Bucket fingerprinted records in discovery order and drop singletons.
    fn group(
        &self,
        outcomes: Vec<(FileRecord, Option<Result<Fingerprint, ReadError>>)>,
        result: &mut ScanResult,
    ) {
        let mut order: Vec<Fingerprint> = Vec::new();
        let mut buckets: HashMap<Fingerprint, (u64, Vec<PathBuf>)> = HashMap::new();

        for (record, outcome) in outcomes {
            match outcome {
                None => result.interrupted = true,
                Some(Ok(fingerprint)) => {
                    let bucket = buckets.entry(fingerprint).or_insert_with(|| {
                        order.push(fingerprint);
                        (record.size, Vec::new())
                    });
                    bucket.1.push(record.path);
                }
                Some(Err(e)) => {
                    log::warn!("Failed to fingerprint {}: {}", record.path.display(), e);
                    result.warnings.push(e);
                }
            }
        }

        for fingerprint in order {
            if let Some((size, paths)) = buckets.remove(&fingerprint) {
                // Singleton buckets have no duplicates and are never materialized.
                if paths.len() < 2 {
                    continue;
                }
                result.duplicate_files += paths.len() - 1;
                result.reclaimable_bytes += size * (paths.len() as u64 - 1);
                result.groups.push(DuplicateGroup::new(fingerprint, size, paths));
            }
        }
    }
}
