use serde::{Deserialize, Serialize};

use super::key_files::file_name;
use crate::scanner::RootDirectory;

/// Directories that hold tests when they are the first path component.
const TEST_DIRS: &[&str] = &["tests", "test", "__tests__", "spec"];

/// Root directories that carry a recognizable role.
const ROLE_DIRS: &[(&str, &str)] = &[
    ("src", "Source code in src/ directory"),
    ("lib", "Library code in lib/ directory"),
    ("scripts", "Utility scripts in scripts/ directory"),
    ("docs", "Documentation in docs/ directory"),
];

const NOTABLE_FILES: &[(&str, &str)] = &[
    ("CODE_OF_CONDUCT.md", "Community code of conduct"),
    ("SECURITY.md", "Security policy and vulnerability reporting"),
    ("CODEOWNERS", "Review ownership per path"),
    (".editorconfig", "Shared editor formatting rules"),
    ("tsconfig.json", "TypeScript compiler settings"),
    (".pre-commit-config.yaml", "Pre-commit hooks run before each commit"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotableFile {
    pub path: String,
    pub significance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conventions {
    pub detected_patterns: Vec<String>,
    pub notable_files: Vec<NotableFile>,
}

#[must_use]
pub fn detect_conventions(
    files: &[String],
    primary_language: &str,
    root_dirs: &[RootDirectory],
) -> Conventions {
    let mut patterns = Vec::new();

    if let Some(dir) = TEST_DIRS
        .iter()
        .find(|dir| files.iter().any(|f| first_component(f) == Some(**dir)))
    {
        patterns.push(format!("Tests in {dir}/ directory"));
    }

    let names = || files.iter().map(|f| file_name(f));
    match primary_language {
        "python" if names().any(|n| n.starts_with("test_") && n.ends_with(".py")) => {
            patterns.push("Python test files use test_*.py naming".to_string());
        }
        "javascript" | "typescript"
            if names().any(|n| n.contains(".test.") || n.contains(".spec.")) =>
        {
            patterns.push("JavaScript test files use *.test.js or *.spec.js naming".to_string());
        }
        "go" if names().any(|n| n.ends_with("_test.go")) => {
            patterns.push("Go test files use *_test.go naming".to_string());
        }
        _ => {}
    }

    for (name, sentence) in ROLE_DIRS {
        if root_dirs.iter().any(|d| d.name == *name) {
            patterns.push((*sentence).to_string());
        }
    }

    let notable_files = files
        .iter()
        .filter_map(|path| {
            let name = file_name(path);
            NOTABLE_FILES
                .iter()
                .find(|(notable, _)| *notable == name)
                .map(|(_, significance)| NotableFile {
                    path: path.clone(),
                    significance: (*significance).to_string(),
                })
        })
        .collect();

    Conventions {
        detected_patterns: patterns,
        notable_files,
    }
}

fn first_component(path: &str) -> Option<&str> {
    path.split_once('/').map(|(first, _)| first)
}

#[cfg(test)]
#[path = "conventions_tests.rs"]
mod tests;
