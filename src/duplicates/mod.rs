//! Duplicate detection module.
//!
//! This module provides:
//! - [`engine`]: scan orchestration (traversal, parallel fingerprinting,
//!   grouping)
//! - [`groups`]: duplicate group and scan result types

pub mod engine;
pub mod groups;

pub use engine::{Engine, EngineConfig, DEFAULT_IO_THREADS};
pub use groups::{DuplicateGroup, ScanResult};
