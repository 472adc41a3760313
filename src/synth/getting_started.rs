use crate::classifier::{KeyFileCategory, TestFramework, file_name};
use crate::report::ScanReport;

/// Install command per configuration file name, highest priority first.
pub const INSTALL_COMMANDS: &[(&str, &str)] = &[
    ("package.json", "npm install"),
    ("requirements.txt", "pip install -r requirements.txt"),
    ("Cargo.toml", "cargo build"),
    ("go.mod", "go mod download"),
    ("pyproject.toml", "pip install -e ."),
    ("pom.xml", "mvn install"),
    ("build.gradle", "gradle build"),
];

pub const TEST_COMMANDS: &[(TestFramework, &str)] = &[
    (TestFramework::Pytest, "pytest"),
    (TestFramework::Jest, "npm test"),
    (TestFramework::GoTest, "go test ./..."),
    (TestFramework::CargoTest, "cargo test"),
    (TestFramework::Junit, "mvn test"),
    (TestFramework::Rspec, "bundle exec rspec"),
    (TestFramework::Phpunit, "vendor/bin/phpunit"),
];

const INSTALL_FALLBACK: &str = "   *Refer to project documentation for setup instructions*";
const TEST_FALLBACK: &str = "   *Run tests according to project documentation*";

#[must_use]
pub fn install_command(report: &ScanReport) -> Option<&'static str> {
    INSTALL_COMMANDS
        .iter()
        .find(|(name, _)| {
            report
                .key_files
                .get(KeyFileCategory::Configuration)
                .iter()
                .any(|p| file_name(p) == *name)
        })
        .map(|(_, command)| *command)
}

#[must_use]
pub fn test_command(framework: TestFramework) -> Option<&'static str> {
    TEST_COMMANDS
        .iter()
        .find(|(f, _)| *f == framework)
        .map(|(_, command)| *command)
}

/// Numbered setup steps: clone, install and, when tests exist, run them.
#[must_use]
pub fn render(report: &ScanReport) -> String {
    let mut steps = vec![
        "1. **Clone the repository**:".to_string(),
        "   ```bash".to_string(),
        "   git clone <repository-url>".to_string(),
        "   cd <repository-name>".to_string(),
        "   ```".to_string(),
        String::new(),
        "2. **Install dependencies**:".to_string(),
    ];

    match install_command(report) {
        Some(command) => push_command(&mut steps, command),
        None => steps.push(INSTALL_FALLBACK.to_string()),
    }

    if report.patterns.has_tests {
        steps.push(String::new());
        steps.push("3. **Run tests**:".to_string());
        match test_command(report.patterns.test_framework) {
            Some(command) => push_command(&mut steps, command),
            None => steps.push(TEST_FALLBACK.to_string()),
        }
    }

    steps.join("\n")
}

fn push_command(steps: &mut Vec<String>, command: &str) {
    steps.push("   ```bash".to_string());
    steps.push(format!("   {command}"));
    steps.push("   ```".to_string());
}

#[cfg(test)]
#[path = "getting_started_tests.rs"]
mod tests;
