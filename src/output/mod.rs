mod error_output;
mod progress;
mod validation;

pub use error_output::{ErrorOutput, print_error, print_warning};
pub use progress::ScanProgress;
pub use validation::ValidationFormatter;

use std::io::IsTerminal;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolves the mode against a concrete stream's TTY status.
    #[must_use]
    pub fn use_colors(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => !is_no_color_set() && is_terminal,
        }
    }

    #[must_use]
    pub fn for_stdout(self) -> bool {
        self.use_colors(std::io::stdout().is_terminal())
    }

    #[must_use]
    pub fn for_stderr(self) -> bool {
        self.use_colors(std::io::stderr().is_terminal())
    }
}

/// Per <https://no-color.org>: presence of the variable (any value) disables color.
fn is_no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
