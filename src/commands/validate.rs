use crate::cli::{Cli, ValidateArgs};
use crate::output::{ColorMode, ValidationFormatter};
use crate::validate::{ValidationResult, validate_path};
use crate::{EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    let result = validate_path(&args.file);
    tracing::info!(
        file = %args.file.display(),
        passed = result.passed_count(),
        total = result.total(),
        "validation finished"
    );

    // Failures are always reported; quiet only silences a clean pass.
    if !(cli.quiet && result.is_pass()) {
        let formatter = ValidationFormatter::new(ColorMode::from(cli.color), cli.verbose > 0);
        print!("{}", formatter.format(&args.file, &result));
    }

    validation_exit_code(&result)
}

/// Exit status depends on the failure count only.
#[must_use]
pub fn validation_exit_code(result: &ValidationResult) -> i32 {
    if result.is_pass() {
        EXIT_SUCCESS
    } else {
        EXIT_VALIDATION_FAILED
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
