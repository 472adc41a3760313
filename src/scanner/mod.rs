mod directory;
mod types;

pub use directory::{DirectoryScanner, SUBDIR_DISPLAY_CAP, relative_path, validate_root};
pub use types::{IgnoreSet, RootDirectory, ScanOutput, ScanWarning};

use std::path::Path;

use crate::error::Result;

/// Trait for walking a repository and producing its raw inventory.
pub trait FileScanner {
    /// Scan a repository root.
    ///
    /// Unreadable entries below the root are reported as warnings in the
    /// output rather than as errors.
    ///
    /// # Errors
    /// Returns `AgentsMdError::InvalidRoot` if `root` is missing or not a directory.
    fn scan(&self, root: &Path) -> Result<ScanOutput>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
