use std::fmt;
use std::fs;
use std::path::Path;

/// Documents smaller than this fail the size check.
pub const MIN_DOCUMENT_BYTES: usize = 100;

/// Checklist entries, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckId {
    DocumentExists,
    MinimumSize,
    OverviewHeading,
    StructureHeading,
    Conventions,
    GettingStarted,
    AgentGuidelines,
}

impl CheckId {
    pub const ALL: [Self; 7] = [
        Self::DocumentExists,
        Self::MinimumSize,
        Self::OverviewHeading,
        Self::StructureHeading,
        Self::Conventions,
        Self::GettingStarted,
        Self::AgentGuidelines,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DocumentExists => "document-exists",
            Self::MinimumSize => "minimum-size",
            Self::OverviewHeading => "overview-heading",
            Self::StructureHeading => "structure-heading",
            Self::Conventions => "conventions",
            Self::GettingStarted => "getting-started",
            Self::AgentGuidelines => "agent-guidelines",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub id: CheckId,
    pub passed: bool,
    pub message: String,
}

impl CheckOutcome {
    fn new(id: CheckId, passed: bool, message: impl Into<String>) -> Self {
        Self {
            id,
            passed,
            message: message.into(),
        }
    }
}

/// Ordered outcomes of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    outcomes: Vec<CheckOutcome>,
}

impl ValidationResult {
    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.total() - self.passed_count()
    }

    /// Failure messages, in checklist order.
    #[must_use]
    pub fn failures(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.message.as_str())
            .collect()
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Runs the content checks against document text that has already been read.
#[must_use]
pub fn validate_content(content: &str) -> ValidationResult {
    let lower = content.to_lowercase();
    let size = content.len();

    let section = |id, present: bool, found: &str, missing: &str| {
        if present {
            CheckOutcome::new(id, true, found)
        } else {
            CheckOutcome::new(id, false, missing)
        }
    };

    let outcomes = vec![
        CheckOutcome::new(CheckId::DocumentExists, true, "File exists"),
        if size >= MIN_DOCUMENT_BYTES {
            CheckOutcome::new(
                CheckId::MinimumSize,
                true,
                format!("File size: {size} bytes (minimum: {MIN_DOCUMENT_BYTES})"),
            )
        } else {
            CheckOutcome::new(
                CheckId::MinimumSize,
                false,
                format!("File too small: {size} bytes (minimum: {MIN_DOCUMENT_BYTES})"),
            )
        },
        section(
            CheckId::OverviewHeading,
            lower.contains("# project overview"),
            "Required section: Project Overview",
            "Missing section: Project Overview",
        ),
        section(
            CheckId::StructureHeading,
            lower.contains("# project structure"),
            "Required section: Project Structure",
            "Missing section: Project Structure",
        ),
        section(
            CheckId::Conventions,
            lower.contains("convention"),
            "Required section: Conventions found",
            "Missing section containing 'convention'",
        ),
        section(
            CheckId::GettingStarted,
            lower.contains("getting started") || lower.contains("setup"),
            "Required section: Getting Started or Setup found",
            "Missing section containing 'getting started' or 'setup'",
        ),
        section(
            CheckId::AgentGuidelines,
            lower.contains("agent"),
            "Required section: Agent guidelines found",
            "Missing section containing 'agent'",
        ),
    ];

    ValidationResult { outcomes }
}

/// Reads and checks the document at `path`.
///
/// A missing or unreadable file yields a result holding only the failed
/// `document-exists` check.
#[must_use]
pub fn validate_path(path: &Path) -> ValidationResult {
    match fs::read_to_string(path) {
        Ok(content) => validate_content(&content),
        Err(err) => {
            let message = if err.kind() == std::io::ErrorKind::NotFound {
                "File does not exist".to_string()
            } else {
                format!("Unable to read file: {err}")
            };
            tracing::debug!(path = %path.display(), error = %err, "document unavailable");
            ValidationResult {
                outcomes: vec![CheckOutcome::new(CheckId::DocumentExists, false, message)],
            }
        }
    }
}

#[cfg(test)]
#[path = "checklist_tests.rs"]
mod tests;
