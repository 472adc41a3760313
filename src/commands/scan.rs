use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;

use super::load_config;
use crate::classifier::Classifier;
use crate::cli::{Cli, ScanArgs};
use crate::config::Config;
use crate::error::{AgentsMdError, Result, RootProblem};
use crate::output::{ScanProgress, print_error};
use crate::report::{RunInfo, ScanReport};
use crate::scanner::{DirectoryScanner, FileScanner, validate_root};
use crate::{EXIT_SCAN_INVALID_INPUT, EXIT_SCAN_WRITE_FAILED, EXIT_SUCCESS};

/// What a successful scan produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub output: PathBuf,
    pub total_files: usize,
    pub total_dirs: usize,
    pub warnings: usize,
}

#[must_use]
pub fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(summary) => {
            if !cli.quiet {
                println!(
                    "✓ Analysis written to {} ({} files, {} directories, {} warnings)",
                    summary.output.display(),
                    summary.total_files,
                    summary.total_dirs,
                    summary.warnings
                );
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e, cli.color.into());
            scan_exit_code(&e)
        }
    }
}

/// Exit code for a failed scan.
#[must_use]
pub const fn scan_exit_code(err: &AgentsMdError) -> i32 {
    match err {
        AgentsMdError::Write { .. } | AgentsMdError::JsonSerialize(_) => EXIT_SCAN_WRITE_FAILED,
        _ => EXIT_SCAN_INVALID_INPUT,
    }
}

/// Scans the repository and writes the analysis artifact.
///
/// # Errors
/// Returns `InvalidRoot` or a config error before any traversal, and `Write`
/// if the artifact cannot be saved.
pub fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> Result<ScanSummary> {
    // 1. Resolve the repository root
    let root = canonical_root(&args.path)?;
    tracing::info!(root = %root.display(), "scanning repository");

    // 2. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config, &root)?;
    apply_cli_overrides(&mut config, args);
    let max_depth = config.scanner.max_depth;
    let ignore = config.scanner.ignore_set();

    // 3. Walk
    let analyzed_at = Utc::now();
    let started = Instant::now();
    let label = root
        .file_name()
        .map_or_else(|| root.display().to_string(), |n| n.to_string_lossy().into_owned());
    let progress = ScanProgress::new(&label, cli.quiet);
    let scanner = DirectoryScanner::new(&ignore, max_depth).with_progress(progress.clone());
    let scan = scanner.scan(&root);
    progress.finish();
    let scan = scan?;
    tracing::debug!(files = progress.position(), "walk finished");

    // 4. Classify and assemble
    let classification = Classifier::from_config(&config).classify(&scan);
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let report = ScanReport::assemble(
        scan,
        classification,
        RunInfo {
            repo_root: root,
            max_depth,
            ignored_dirs: ignore.to_sorted_vec(),
            analyzed_at,
            analysis_duration_ms: elapsed_ms,
        },
    );

    for warning in &report.warnings {
        tracing::info!(%warning, "scan warning");
    }

    // 5. Persist
    report.save(&args.output)?;
    tracing::debug!(output = %args.output.display(), elapsed_ms, "analysis saved");

    Ok(ScanSummary {
        output: args.output.clone(),
        total_files: report.metadata.total_files,
        total_dirs: report.metadata.total_dirs,
        warnings: report.warnings.len(),
    })
}

fn apply_cli_overrides(config: &mut Config, args: &ScanArgs) {
    if let Some(max_depth) = args.max_depth {
        config.scanner.max_depth = max_depth;
    }
}

/// Validates `path` and returns its absolute form without `\\?\` prefixes.
fn canonical_root(path: &Path) -> Result<PathBuf> {
    validate_root(path)?;
    dunce::canonicalize(path).map_err(|_| AgentsMdError::InvalidRoot {
        path: path.to_path_buf(),
        problem: RootProblem::Missing,
    })
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
