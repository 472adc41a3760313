use super::display_language;
use crate::classifier::{ProjectType, UNKNOWN_LANGUAGE};
use crate::report::ScanReport;

/// Conventions repeated as guidance.
pub const GUIDANCE_PATTERN_CAP: usize = 3;

const BEST_PRACTICES: &[&str] = &[
    "Read existing code patterns before making changes",
    "Preserve existing naming conventions and structure",
    "Add tests for new functionality",
    "Update documentation when adding features",
    "Check for similar existing implementations before creating new code",
];

fn project_caution(project_type: ProjectType) -> Option<&'static str> {
    match project_type {
        ProjectType::Monorepo => Some(
            "- **Monorepo Structure**: This is a monorepo - be mindful of cross-package dependencies",
        ),
        ProjectType::Library => Some(
            "- **Library Project**: Maintain backward compatibility and semantic versioning",
        ),
        ProjectType::Api => Some(
            "- **API Project**: Follow RESTful/API design principles and document endpoints",
        ),
        ProjectType::WebApp | ProjectType::SingleProject | ProjectType::Unknown => None,
    }
}

#[must_use]
pub fn render(report: &ScanReport) -> String {
    let patterns = &report.patterns;
    let mut lines = vec!["### Working with This Codebase".to_string(), String::new()];

    if patterns.primary_language != UNKNOWN_LANGUAGE {
        lines.push(format!(
            "- **Primary Language**: {}",
            display_language(&patterns.primary_language)
        ));
    }

    if patterns.has_tests {
        lines.push("- **Testing**: Always run tests before committing changes".to_string());
        if patterns.test_framework.is_known() {
            lines.push(format!("  - Framework: {}", patterns.test_framework));
        }
    }

    let detected = &report.conventions.detected_patterns;
    if !detected.is_empty() {
        lines.push("- **Code Conventions**: Follow detected patterns:".to_string());
        lines.extend(
            detected
                .iter()
                .take(GUIDANCE_PATTERN_CAP)
                .map(|p| format!("  - {p}")),
        );
    }

    if let Some(caution) = project_caution(patterns.project_type) {
        lines.push(caution.to_string());
    }

    if patterns.has_docker {
        lines.push(
            "- **Docker**: Containerization is configured - test in containers when possible"
                .to_string(),
        );
    }
    if patterns.has_kubernetes {
        lines.push(
            "- **Kubernetes**: Orchestration manifests are present - keep them in sync with service changes"
                .to_string(),
        );
    }
    if patterns.has_ci {
        lines.push(
            "- **CI/CD**: Automated checks are configured - ensure pipelines pass".to_string(),
        );
    }

    lines.push(String::new());
    lines.push("### Best Practices for AI Agents".to_string());
    lines.push(String::new());
    lines.extend(BEST_PRACTICES.iter().map(|p| format!("- {p}")));

    lines.join("\n")
}

#[cfg(test)]
#[path = "guidelines_tests.rs"]
mod tests;
