//! Command-line entry point for extract-glb.
//!
//! Exit codes: `0` on success, `1` on any failure while reading or
//! extracting, `2` on bad usage.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use extract_glb::glb::prepare_output_dir;
use extract_glb::{Cli, GlbEntry, GlbExtractor, LocalFileReader};

/// Application entry point.
///
/// Parses command-line arguments, runs the extraction and maps the outcome
/// to an exit code. Argument errors print usage to stdout and exit with `2`;
/// any other failure is printed to stderr as a single line and exits with `1`.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage goes to stdout for argument errors
            print!("{}", e.render());
            return ExitCode::from(2);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Open the archive named on the command line and list or extract it.
///
/// In list mode nothing is written. Otherwise every qualifying entry is
/// extracted into the `-d` directory, or the current directory when none is
/// given, printing one progress line per entry unless quiet.
///
/// # Arguments
///
/// * `cli` - Parsed command-line arguments
///
/// # Returns
///
/// Returns `Ok(())` on success, or the first error hit while opening,
/// parsing or extracting. Extraction stops at that error.
fn run(cli: &Cli) -> Result<()> {
    let reader = LocalFileReader::new(Path::new(&cli.file))
        .with_context(|| format!("Unable to open \"{}\"", cli.file))?;
    let extractor = GlbExtractor::new(reader);

    let entries = extractor.list_entries()?;

    if cli.list {
        list_entries(&entries, !cli.is_very_quiet());
        return Ok(());
    }

    let out_dir = cli
        .extract_dir
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_default();
    prepare_output_dir(&out_dir)
        .with_context(|| format!("Unable to create \"{}\"", out_dir.display()))?;

    extractor.extract_entries(&entries, &out_dir, |entry| {
        if !cli.is_quiet() {
            println!("  extracting: {}", entry.name());
        }
    })?;

    Ok(())
}

/// List the archive directory.
///
/// Prints a table of offset, size and name, one row per directory entry in
/// archive order. Section markers and entries that would not be extracted
/// are flagged, and only extractable entries count towards the totals.
///
/// # Arguments
///
/// * `entries` - The parsed directory, markers included
/// * `summary` - If true, print the column header and the totals line
fn list_entries(entries: &[GlbEntry], summary: bool) {
    if summary {
        println!("{:>10}  {:>10}  Name", "Offset", "Size");
        println!("{}", "-".repeat(44));
    }

    let mut total = 0u64;
    let mut file_count = 0usize;

    for entry in entries {
        let note = if entry.is_marker() {
            "  (marker)"
        } else if !entry.should_extract() {
            "  (skipped)"
        } else {
            total += entry.size as u64;
            file_count += 1;
            ""
        };
        println!(
            "{:>10}  {:>10}  {}{}",
            entry.offset,
            entry.size,
            entry.name(),
            note
        );
    }

    if summary {
        println!("{}", "-".repeat(44));
        println!("{:>10}  {:>10}  {} files", "", total, file_count);
    }
}
