pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod language;
pub mod logging;
pub mod output;
pub mod report;
pub mod scanner;
pub mod synth;
pub mod validate;

pub use error::{AgentsMdError, Result};

pub const EXIT_SUCCESS: i32 = 0;

/// `scan`: the root path or the configuration was rejected.
pub const EXIT_SCAN_INVALID_INPUT: i32 = 1;
/// `scan`: the analysis file could not be written.
pub const EXIT_SCAN_WRITE_FAILED: i32 = 2;

/// `synthesize`: the analysis file is missing or malformed.
pub const EXIT_SYNTH_INVALID_ARTIFACT: i32 = 1;
/// `synthesize`: the template was unreadable; the built-in layout was written instead.
pub const EXIT_SYNTH_TEMPLATE_MISSING: i32 = 2;
/// `synthesize`: the document could not be written.
pub const EXIT_SYNTH_WRITE_FAILED: i32 = 3;

/// `validate`: at least one check failed.
pub const EXIT_VALIDATION_FAILED: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
