//! Duplicate set management.
//!
//! This module consumes the engine's groups and provides:
//! - [`summary`]: aggregate statistics re-derived from the group sequence
//! - [`remove`]: deletion of all but a caller-chosen representative per
//!   group, with partial-failure semantics
//!
//! ```no_run
//! use dupelens::actions::{remove, summarize, RemovalConfig};
//! use dupelens::duplicates::Engine;
//! use std::path::Path;
//!
//! let result = Engine::with_defaults().scan(Path::new(".")).unwrap();
//! let summary = summarize(&result);
//! println!("{} removable copies", summary.duplicate_count);
//!
//! if let Some(group) = result.groups.first() {
//!     let keep = group.paths[0].clone();
//!     let report = remove(group, &keep, &RemovalConfig::default()).unwrap();
//!     println!("{}", report.summary());
//! }
//! ```

pub mod remove;
pub mod summary;

// Re-export commonly used types
pub use remove::{
    remove, DeletionError, RemovalConfig, RemovalFailure, RemovalMode, RemovalReport,
    SelectionError,
};
pub use summary::{summarize, Summary};
