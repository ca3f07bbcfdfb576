//! Command-line interface definitions.
//!
//! The CLI is a thin presentation adapter over the core: it selects the
//! directory, renders results, and owns the confirmation step before any
//! removal. Arguments use the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Scan a directory and print duplicate groups
//! dupelens scan ~/Downloads
//!
//! # JSON output for scripting
//! dupelens scan ~/Downloads --output json
//!
//! # Remove all but the first copy per group, after confirmation
//! dupelens scan ~/Downloads --delete
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::duplicates::DEFAULT_IO_THREADS;

/// Content-based duplicate file finder.
///
/// Finds byte-identical files under a directory tree using streaming BLAKE3
/// fingerprints and can remove redundant copies, always keeping one
/// representative per group.
#[derive(Debug, Parser)]
#[command(name = "dupelens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a directory tree for byte-identical files
    Scan(ScanArgs),
}

/// Arguments for the scan subcommand.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to scan for duplicates
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Number of fingerprinting threads
    ///
    /// Lower values reduce disk thrashing on HDDs.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_IO_THREADS)]
    pub threads: usize,

    /// Remove all but the first discovered copy of every group
    #[arg(long)]
    pub delete: bool,

    /// Move removed files to the system trash instead of deleting permanently
    #[arg(long, requires = "delete")]
    pub trash: bool,

    /// Skip the confirmation prompt before removal
    #[arg(short = 'y', long, requires = "delete")]
    pub yes: bool,
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON for scripting
    Json,
}
