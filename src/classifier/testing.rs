use std::fmt;

use serde::{Deserialize, Serialize};

use super::key_files::file_name;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestFramework {
    Pytest,
    Jest,
    GoTest,
    CargoTest,
    Junit,
    Rspec,
    Phpunit,
    #[default]
    Unknown,
}

impl TestFramework {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pytest => "pytest",
            Self::Jest => "jest",
            Self::GoTest => "go-test",
            Self::CargoTest => "cargo-test",
            Self::Junit => "junit",
            Self::Rspec => "rspec",
            Self::Phpunit => "phpunit",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A test-related file as seen by framework rules.
pub struct TestFile<'a> {
    pub path_lower: String,
    pub name: &'a str,
}

/// Language-specific refinement, applied only when the primary language matches.
pub struct FrameworkRule {
    pub languages: &'static [&'static str],
    pub framework: TestFramework,
    pub matches: fn(&TestFile<'_>) -> bool,
}

pub const FRAMEWORK_RULES: &[FrameworkRule] = &[
    FrameworkRule {
        languages: &["python"],
        framework: TestFramework::Pytest,
        matches: |f| f.name.to_ascii_lowercase().starts_with("test_") || f.path_lower.contains("pytest"),
    },
    FrameworkRule {
        languages: &["javascript", "typescript"],
        framework: TestFramework::Jest,
        matches: |f| {
            let name = f.name.to_ascii_lowercase();
            name.contains(".test.") || name.contains(".spec.")
        },
    },
    FrameworkRule {
        languages: &["go"],
        framework: TestFramework::GoTest,
        matches: |f| f.name.to_ascii_lowercase().ends_with("_test.go"),
    },
    FrameworkRule {
        languages: &["rust"],
        framework: TestFramework::CargoTest,
        matches: |f| f.path_lower.contains("tests/") || f.name == "lib.rs",
    },
    FrameworkRule {
        languages: &["java"],
        framework: TestFramework::Junit,
        matches: |f| f.path_lower.contains("junit") || f.path_lower.contains("test"),
    },
    FrameworkRule {
        languages: &["ruby"],
        framework: TestFramework::Rspec,
        matches: |f| f.name.to_ascii_lowercase().ends_with("_spec.rb"),
    },
    FrameworkRule {
        languages: &["php"],
        framework: TestFramework::Phpunit,
        matches: |f| f.name.ends_with("Test.php"),
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestDetection {
    pub has_tests: bool,
    pub framework: TestFramework,
}

/// A file is test-related when its path mentions `test` or `spec`, in any case.
#[must_use]
pub fn is_test_related(path: &str) -> bool {
    let lower = path.to_lowercase();
    lower.contains("test") || lower.contains("spec")
}

#[must_use]
pub fn detect_test_framework(files: &[String], primary_language: &str) -> TestDetection {
    let test_files: Vec<TestFile<'_>> = files
        .iter()
        .filter(|p| is_test_related(p))
        .map(|p| TestFile {
            path_lower: p.to_lowercase(),
            name: file_name(p),
        })
        .collect();

    if test_files.is_empty() {
        return TestDetection::default();
    }

    let framework = FRAMEWORK_RULES
        .iter()
        .filter(|rule| rule.languages.contains(&primary_language))
        .find(|rule| test_files.iter().any(|f| (rule.matches)(f)))
        .map_or(TestFramework::Unknown, |rule| rule.framework);

    TestDetection {
        has_tests: true,
        framework,
    }
}

#[cfg(test)]
#[path = "testing_tests.rs"]
mod tests;
