use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum level for the crate's own diagnostics.
///
/// Quiet silences everything; otherwise each `-v` raises the level one step
/// from `warn`.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr fmt subscriber. A second call is a no-op.
pub fn init(verbose: u8, quiet: bool, use_colors: bool) {
    let filter = EnvFilter::new(format!("agents_md={}", level_for(verbose, quiet)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_colors)
                .with_target(verbose > 1)
                .without_time(),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, quiet, "logging initialized");
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
