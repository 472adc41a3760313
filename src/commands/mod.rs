pub mod scan;
pub mod synthesize;
pub mod validate;

pub use scan::{ScanSummary, run_scan, run_scan_impl, scan_exit_code};
pub use synthesize::{
    SynthesisOutcome, TemplateFallback, run_synthesize, run_synthesize_impl, synthesize_exit_code,
};
pub use validate::{run_validate, validation_exit_code};

use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;

/// Resolves the effective configuration for a scan of `root`.
///
/// An explicit path wins; otherwise `<root>/.agents-md.toml` is used when present.
///
/// # Errors
/// Returns an error if the chosen config file cannot be read, parsed or validated.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
    root: &Path,
) -> Result<Config> {
    if no_config {
        tracing::debug!("--no-config given, using built-in defaults");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(
        || loader.load_for_root(root),
        |path| loader.load_from_path(path),
    )
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
