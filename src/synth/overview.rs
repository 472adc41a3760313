use super::display_language;
use crate::classifier::UNKNOWN_LANGUAGE;
use crate::report::ScanReport;

/// One-paragraph summary built from fixed clauses in a fixed order.
#[must_use]
pub fn render(report: &ScanReport) -> String {
    let patterns = &report.patterns;
    let mut text = format!(
        "This repository contains {}",
        patterns.project_type.phrase()
    );

    if patterns.primary_language != UNKNOWN_LANGUAGE {
        text.push_str(" built with ");
        text.push_str(&display_language(&patterns.primary_language));
    }
    if patterns.has_tests && patterns.test_framework.is_known() {
        text.push_str(". Testing is implemented using ");
        text.push_str(patterns.test_framework.as_str());
    }
    if patterns.has_docker {
        text.push_str(" and includes Docker containerization");
    }
    if patterns.has_kubernetes {
        text.push_str(" with Kubernetes orchestration");
    }
    if patterns.has_ci {
        text.push_str(" with continuous integration configured");
    }
    text.push('.');

    text
}

#[cfg(test)]
#[path = "overview_tests.rs"]
mod tests;
