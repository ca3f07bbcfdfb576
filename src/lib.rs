//! dupelens - content-based duplicate file detection.
//!
//! Finds byte-identical files under a directory tree by streaming BLAKE3
//! fingerprints over file content, and supports removing redundant copies
//! while always keeping one representative per group.

pub mod actions;
pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod scanner;
pub mod signal;
