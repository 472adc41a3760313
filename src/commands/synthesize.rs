use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, SynthesizeArgs};
use crate::error::{AgentsMdError, Result};
use crate::output::{ColorMode, print_error, print_warning};
use crate::report::ScanReport;
use crate::synth::{Document, write_document};
use crate::{
    EXIT_SUCCESS, EXIT_SYNTH_INVALID_ARTIFACT, EXIT_SYNTH_TEMPLATE_MISSING,
    EXIT_SYNTH_WRITE_FAILED,
};

/// What a successful synthesis produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOutcome {
    pub output: PathBuf,
    pub bytes: usize,
    /// Set when a template was requested but could not be read.
    pub template_fallback: Option<TemplateFallback>,
}

/// A requested template that was skipped in favor of the built-in layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFallback {
    pub path: PathBuf,
    pub reason: String,
}

#[must_use]
pub fn run_synthesize(args: &SynthesizeArgs, cli: &Cli) -> i32 {
    let mode = ColorMode::from(cli.color);
    match run_synthesize_impl(args) {
        Ok(outcome) => {
            if let Some(fallback) = &outcome.template_fallback {
                let message = format!("Template not found: {}", fallback.path.display());
                print_warning(
                    mode,
                    &message,
                    Some(&fallback.reason),
                    Some("Using the built-in document layout"),
                );
            }
            if !cli.quiet {
                println!(
                    "✓ {} generated ({} bytes)",
                    outcome.output.display(),
                    outcome.bytes
                );
            }
            if outcome.template_fallback.is_some() {
                EXIT_SYNTH_TEMPLATE_MISSING
            } else {
                EXIT_SUCCESS
            }
        }
        Err(e) => {
            print_error(&e, mode);
            synthesize_exit_code(&e)
        }
    }
}

/// Exit code for a failed synthesis.
#[must_use]
pub const fn synthesize_exit_code(err: &AgentsMdError) -> i32 {
    match err {
        AgentsMdError::Write { .. } => EXIT_SYNTH_WRITE_FAILED,
        _ => EXIT_SYNTH_INVALID_ARTIFACT,
    }
}

/// Renders the document from the analysis artifact and writes it.
///
/// An unreadable template is not an error: the built-in layout is used and
/// the fallback is reported in the outcome.
///
/// # Errors
/// Returns an artifact error if the input is missing or malformed, and
/// `Write` if the document cannot be written.
pub fn run_synthesize_impl(args: &SynthesizeArgs) -> Result<SynthesisOutcome> {
    // 1. Load the artifact
    let report = ScanReport::load(&args.input)?;
    tracing::info!(input = %args.input.display(), "loaded analysis");

    // 2. Render
    let document = Document::from_report(&report);
    let (content, template_fallback) = match args.template.as_deref() {
        None => (document.render(), None),
        Some(path) => match read_template(path) {
            Ok(template) => (document.render_with_template(&template), None),
            Err(fallback) => (document.render(), Some(fallback)),
        },
    };

    // 3. Write
    write_document(&args.output, &content)?;
    tracing::debug!(output = %args.output.display(), bytes = content.len(), "document written");

    Ok(SynthesisOutcome {
        output: args.output.clone(),
        bytes: content.len(),
        template_fallback,
    })
}

fn read_template(path: &Path) -> std::result::Result<String, TemplateFallback> {
    fs::read_to_string(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "template unreadable, using built-in layout");
        TemplateFallback {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
#[path = "synthesize_tests.rs"]
mod tests;
