use std::fmt::Write;

use crate::report::ScanReport;

pub const NO_CONVENTIONS: &str =
    "*No specific conventions detected. Follow standard practices for the detected language.*";

#[must_use]
pub fn render(report: &ScanReport) -> String {
    let conventions = &report.conventions;
    let mut out = if conventions.detected_patterns.is_empty() {
        NO_CONVENTIONS.to_string()
    } else {
        conventions
            .detected_patterns
            .iter()
            .map(|p| format!("- {p}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    if !conventions.notable_files.is_empty() {
        out.push_str("\n\n**Notable files**:\n");
        for notable in &conventions.notable_files {
            write!(out, "\n- `{}`: {}", notable.path, notable.significance).ok();
        }
    }

    out
}

#[cfg(test)]
#[path = "conventions_tests.rs"]
mod tests;
