//! Deterministic directory traversal.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory tree
//! and collecting metadata for every regular file. It uses [`jwalk`] with
//! directory entries sorted lexicographically at each level, so discovery
//! order is reproducible for a given tree regardless of platform directory
//! ordering.
//!
//! Symbolic links and non-regular files (devices, sockets, FIFOs) are
//! skipped: they have no content to fingerprint.
//!
//! # Example
//!
//! ```no_run
//! use dupelens::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"));
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(record) => println!("{}: {} bytes", record.path.display(), record.size),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use super::{FileRecord, ReadError};

/// Directory walker yielding regular files in deterministic order.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root directory.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Walk the tree, yielding one [`FileRecord`] per regular file.
    ///
    /// Errors for individual entries are yielded as [`ReadError`] values
    /// rather than stopping iteration; callers collect them as scan-level
    /// warnings.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileRecord, ReadError>> + '_ {
        let walk_dir = WalkDir::new(&self.root)
            .follow_links(false)
            .skip_hidden(false)
            .process_read_dir(|_depth, _path, _read_dir_state, children| {
                // Lexicographic entry order keeps discovery order reproducible.
                children.sort_by(|a, b| match (a, b) {
                    (Ok(a), Ok(b)) => a.file_name().cmp(b.file_name()),
                    (Ok(_), Err(_)) => std::cmp::Ordering::Less,
                    (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
                    (Err(_), Err(_)) => std::cmp::Ordering::Equal,
                });
            });

        walk_dir.into_iter().filter_map(move |entry_result| {
            match entry_result {
                Ok(entry) => {
                    let path = entry.path();
                    let file_type = entry.file_type();

                    if file_type.is_dir() {
                        return None;
                    }

                    if file_type.is_symlink() {
                        log::trace!("Skipping symlink: {}", path.display());
                        return None;
                    }

                    let metadata = match std::fs::symlink_metadata(&path) {
                        Ok(m) => m,
                        Err(e) => return Some(Err(ReadError::from_io(&path, e))),
                    };

                    if !metadata.is_file() {
                        log::trace!("Skipping non-regular file: {}", path.display());
                        return None;
                    }

                    Some(Ok(FileRecord::new(path, metadata.len())))
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map_or_else(|| self.root.clone(), Path::to_path_buf);
                    Some(Err(ReadError::Io {
                        path,
                        source: std::io::Error::other(e.to_string()),
                    }))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_walk_yields_regular_files_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.txt"), b"b").unwrap();

        let walker = Walker::new(dir.path());
        let records: Vec<_> = walker.walk().filter_map(Result::ok).collect();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.path.is_file()));
    }

    #[test]
    fn test_walk_order_is_lexicographic_per_level() {
        let dir = tempdir().unwrap();
        // Created out of order on purpose
        fs::write(dir.path().join("zebra.txt"), b"z").unwrap();
        fs::write(dir.path().join("apple.txt"), b"a").unwrap();
        fs::write(dir.path().join("mango.txt"), b"m").unwrap();

        let walker = Walker::new(dir.path());
        let names: Vec<String> = walker
            .walk()
            .filter_map(Result::ok)
            .map(|r| r.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["apple.txt", "mango.txt", "zebra.txt"]);
    }

    #[test]
    fn test_walk_records_carry_sizes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("five.bin"), b"12345").unwrap();

        let walker = Walker::new(dir.path());
        let records: Vec<_> = walker.walk().filter_map(Result::ok).collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].size, 5);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_symlinks() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.txt");
        fs::write(&target, b"content").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.txt")).unwrap();

        let walker = Walker::new(dir.path());
        let records: Vec<_> = walker.walk().filter_map(Result::ok).collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, target);
    }

    #[test]
    fn test_walk_empty_directory() {
        let dir = tempdir().unwrap();
        let walker = Walker::new(dir.path());
        assert_eq!(walker.walk().count(), 0);
    }
}
