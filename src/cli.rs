use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::ColorMode;
use crate::report::DEFAULT_REPORT_PATH;
use crate::synth::DEFAULT_DOCUMENT_PATH;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "agents-md")]
#[command(author, version, about = "Generate and validate AGENTS.md onboarding documents")]
#[command(long_about = "Scan a repository layout, infer its conventions, and synthesize an \
    AGENTS.md onboarding document for coding agents.\n\n\
    Pipeline:\n  \
    agents-md scan [PATH]    write .agents_analysis.json\n  \
    agents-md synthesize     render AGENTS.md from the analysis\n  \
    agents-md validate       check AGENTS.md against the checklist")]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk a repository and write the analysis artifact
    #[command(after_help = "Exit codes:\n  \
        0 - Analysis written\n  \
        1 - Invalid repository path or configuration\n  \
        2 - Unable to write the analysis file")]
    Scan(ScanArgs),

    /// Render AGENTS.md from an analysis artifact
    #[command(after_help = "Exit codes:\n  \
        0 - Document written\n  \
        1 - Analysis file missing or invalid\n  \
        2 - Template file missing (document still written with built-in layout)\n  \
        3 - Unable to write the document")]
    Synthesize(SynthesizeArgs),

    /// Check AGENTS.md against the compliance checklist
    #[command(after_help = "Exit codes:\n  \
        0 - All checks passed\n  \
        1 - One or more checks failed")]
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Repository root to analyze
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Maximum directory depth to traverse (overrides config, default: 5)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Where to write the analysis JSON
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Path to configuration file (default: <PATH>/.agents-md.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SynthesizeArgs {
    /// Analysis JSON produced by `scan`
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    pub input: PathBuf,

    /// Where to write the document
    #[arg(short, long, default_value = DEFAULT_DOCUMENT_PATH)]
    pub output: PathBuf,

    /// Markdown template with {{placeholder}} markers
    #[arg(short, long)]
    pub template: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Document to validate (pass -v/--verbose to list every check)
    #[arg(short, long, default_value = DEFAULT_DOCUMENT_PATH)]
    pub file: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
