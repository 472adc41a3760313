mod conventions;
mod document;
mod getting_started;
mod guidelines;
mod overview;
mod structure;

#[cfg(test)]
mod test_fixtures;

pub use document::{DOCUMENT_FOOTER, DOCUMENT_TITLE, Document, Section, SectionKind};
pub use getting_started::{INSTALL_COMMANDS, TEST_COMMANDS, install_command, test_command};
pub use structure::{EMPTY_STRUCTURE, NO_KEY_FILES};

use std::fs;
use std::path::Path;

use crate::error::{AgentsMdError, Result};
use crate::report::ScanReport;

/// Default document location, relative to the working directory.
pub const DEFAULT_DOCUMENT_PATH: &str = "AGENTS.md";

/// Built-in rendering of the whole document.
#[must_use]
pub fn synthesize(report: &ScanReport) -> String {
    Document::from_report(report).render()
}

/// Writes rendered Markdown to `path`.
///
/// # Errors
/// Returns `AgentsMdError::Write` if the file cannot be written.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| AgentsMdError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Language name as shown in prose: first letter upper-cased.
pub(crate) fn display_language(language: &str) -> String {
    let mut chars = language.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
