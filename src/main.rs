//! Entry point for the dupelens CLI.
//!
//! The binary is a thin presentation adapter: it invokes the core
//! (`scan` / `summarize` / `remove`), renders results, and owns the
//! confirmation prompt before any removal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use bytesize::ByteSize;
use clap::Parser;
use serde::Serialize;

use dupelens::actions::{self, RemovalConfig, Summary};
use dupelens::cli::{Cli, Commands, OutputFormat, ScanArgs};
use dupelens::duplicates::{Engine, EngineConfig, ScanResult};
use dupelens::error::ExitCode;
use dupelens::{logging, signal};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let Commands::Scan(args) = cli.command;

    let handler = signal::install_handler().context("failed to install Ctrl+C handler")?;

    let config = EngineConfig::default()
        .with_io_threads(args.threads)
        .with_cancel_flag(handler.flag());
    let engine = Engine::new(config);

    let result = engine.scan(&args.path)?;
    let summary = actions::summarize(&result);

    match args.output {
        OutputFormat::Text => render_text(&result, &summary),
        OutputFormat::Json => render_json(&result, &summary)?,
    }

    if args.delete && !result.groups.is_empty() {
        delete_duplicates(&args, &result)?;
    }

    if result.is_partial() {
        return Ok(ExitCode::Interrupted);
    }
    Ok(if result.groups.is_empty() {
        ExitCode::NoDuplicates
    } else {
        ExitCode::Success
    })
}

fn render_text(result: &ScanResult, summary: &Summary) {
    for (group_id, group) in result.groups.iter().enumerate() {
        println!("Duplicate {}", group_id + 1);
        for path in &group.paths {
            println!("  {}", path.display());
        }
    }

    println!(
        "Found {} duplicates in {} groups. Time taken: {:.2} seconds",
        summary.duplicate_count,
        summary.group_count,
        result.scan_duration.as_secs_f64()
    );
    println!(
        "Removing duplicates will free up {} on disk.",
        ByteSize(summary.reclaimable_bytes)
    );

    if result.warning_count() > 0 {
        println!("{} file(s) skipped due to read errors.", result.warning_count());
    }
    if result.is_partial() {
        println!("Scan was interrupted; results are partial.");
    }
}

/// JSON view of a scan for scripting consumers.
#[derive(Serialize)]
struct JsonReport<'a> {
    groups: Vec<JsonGroup<'a>>,
    summary: &'a Summary,
    total_files: usize,
    warning_count: usize,
    interrupted: bool,
    scan_seconds: f64,
}

#[derive(Serialize)]
struct JsonGroup<'a> {
    fingerprint: String,
    size: u64,
    paths: &'a [PathBuf],
}

fn render_json(result: &ScanResult, summary: &Summary) -> anyhow::Result<()> {
    let report = JsonReport {
        groups: result
            .groups
            .iter()
            .map(|g| JsonGroup {
                fingerprint: g.fingerprint_hex(),
                size: g.size,
                paths: &g.paths,
            })
            .collect(),
        summary,
        total_files: result.total_files,
        warning_count: result.warning_count(),
        interrupted: result.interrupted,
        scan_seconds: result.scan_duration.as_secs_f64(),
    };

    let json = serde_json::to_string_pretty(&report).context("failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

fn delete_duplicates(args: &ScanArgs, result: &ScanResult) -> anyhow::Result<()> {
    let summary = actions::summarize(result);

    if !args.yes {
        let mechanism = if args.trash { "move to trash" } else { "permanently delete" };
        if !confirm(&format!(
            "About to {} {} file(s) ({}). Continue? [y/N] ",
            mechanism,
            summary.duplicate_count,
            ByteSize(summary.reclaimable_bytes)
        ))? {
            println!("Aborted; nothing deleted.");
            return Ok(());
        }
    }

    let config = if args.trash {
        RemovalConfig::trash()
    } else {
        RemovalConfig::permanent()
    };

    let mut removed = 0;
    let mut failed = 0;
    let mut bytes_freed = 0;

    for group in &result.groups {
        // Keep the first discovered copy of each group.
        let keep = &group.paths[0];
        let report = actions::remove(group, keep, &config)?;
        removed += report.removed_count();
        failed += report.failed_count();
        bytes_freed += report.bytes_freed;

        for failure in &report.failed {
            eprintln!("Failed to remove {}: {}", failure.path.display(), failure.error);
        }
    }

    println!(
        "Removed {} file(s) ({} freed), {} failed.",
        removed,
        ByteSize(bytes_freed),
        failed
    );
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read confirmation")?;

    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}
