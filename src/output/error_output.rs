//! Unified error and warning output formatting with color support.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::Write;

use super::ColorMode;
use super::ansi;
use crate::error::AgentsMdError;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a new error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.for_stderr(),
        }
    }

    /// Prints a crate error with its type, detail and remediation hint.
    pub fn print_agents_error(&self, err: &AgentsMdError) {
        let mut stderr = std::io::stderr().lock();
        self.write_agents_error(&mut stderr, err);
    }

    /// Prints a warning message with detail.
    pub fn print_warning_with_detail(
        &self,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail, suggestion);
    }

    pub fn write_agents_error<W: Write>(&self, w: &mut W, err: &AgentsMdError) {
        let detail = err.detail();
        self.write_error(
            w,
            err.error_type(),
            &err.message(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    /// Writes error to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write errors are discarded; there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_tail(w, detail, suggestion);
    }

    /// Writes warning to a writer.
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_tail(w, detail, suggestion);
    }

    fn write_tail<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

/// Convenience function: prints a crate error using the given color mode.
pub fn print_error(err: &AgentsMdError, mode: ColorMode) {
    ErrorOutput::new(mode).print_agents_error(err);
}

/// Convenience function: prints a warning with detail and suggestion.
pub fn print_warning(mode: ColorMode, message: &str, detail: Option<&str>, suggestion: Option<&str>) {
    ErrorOutput::new(mode).print_warning_with_detail(message, detail, suggestion);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
