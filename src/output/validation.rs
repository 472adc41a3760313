use std::fmt::Write;
use std::path::Path;

use super::{ColorMode, ansi};
use crate::validate::ValidationResult;

/// Renders a validation result for the terminal.
pub struct ValidationFormatter {
    use_colors: bool,
    verbose: bool,
}

impl ValidationFormatter {
    #[must_use]
    pub fn new(mode: ColorMode, verbose: bool) -> Self {
        Self::with_colors(mode.for_stdout(), verbose)
    }

    #[must_use]
    pub const fn with_colors(use_colors: bool, verbose: bool) -> Self {
        Self {
            use_colors,
            verbose,
        }
    }

    fn mark(&self, passed: bool) -> String {
        let (icon, color) = if passed {
            ("✓", ansi::GREEN)
        } else {
            ("✗", ansi::RED)
        };
        if self.use_colors {
            format!("{color}{icon}{}", ansi::RESET)
        } else {
            icon.to_string()
        }
    }

    #[must_use]
    pub fn format(&self, path: &Path, result: &ValidationResult) -> String {
        let mut out = String::new();
        let total = result.total();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        if self.verbose {
            writeln!(out, "Validating: {}", path.display()).ok();
            for outcome in result.outcomes() {
                writeln!(out, "{} {}", self.mark(outcome.passed), outcome.message).ok();
            }
            if result.is_pass() {
                writeln!(
                    out,
                    "{} Validation passed ({}/{total} checks)",
                    self.mark(true),
                    result.passed_count()
                )
                .ok();
            } else {
                writeln!(
                    out,
                    "{} Validation failed ({}/{total} checks)",
                    self.mark(false),
                    result.failed_count()
                )
                .ok();
            }
            return out;
        }

        if result.is_pass() {
            writeln!(
                out,
                "{} {name} validation passed ({}/{total} checks)",
                self.mark(true),
                result.passed_count()
            )
            .ok();
        } else {
            writeln!(
                out,
                "{} {name} validation failed ({}/{total} checks)",
                self.mark(false),
                result.failed_count()
            )
            .ok();
            for failure in result.failures() {
                writeln!(out, "  - {failure}").ok();
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
