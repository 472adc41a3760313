mod conventions;
mod key_files;
mod language;
mod project_type;
mod testing;

pub use conventions::{Conventions, NotableFile, detect_conventions};
pub use key_files::{
    KeyFileCategory, KeyFileRule, KeyFileRules, KeyFiles, MatchKind, categorize_key_files,
};
pub(crate) use key_files::file_name;
pub use language::{UNKNOWN_LANGUAGE, count_languages, detect_primary_language};
pub use project_type::{ProjectType, ProjectTypeRule, infer_project_type};
pub use testing::{TestDetection, TestFramework, detect_test_framework, is_test_related};

use serde::{Deserialize, Serialize};

use crate::config::{Config, ProjectTables};
use crate::language::LanguageRegistry;
use crate::scanner::ScanOutput;

/// Inferred repository characteristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patterns {
    pub primary_language: String,
    pub has_tests: bool,
    pub test_framework: TestFramework,
    pub has_docker: bool,
    pub has_kubernetes: bool,
    pub has_ci: bool,
    pub project_type: ProjectType,
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            primary_language: UNKNOWN_LANGUAGE.to_string(),
            has_tests: false,
            test_framework: TestFramework::Unknown,
            has_docker: false,
            has_kubernetes: false,
            has_ci: false,
            project_type: ProjectType::Unknown,
        }
    }
}

/// Everything the classifier derives from one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub key_files: KeyFiles,
    pub patterns: Patterns,
    pub conventions: Conventions,
}

/// Infrastructure flags read off the categorized key files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfrastructureFlags {
    pub has_docker: bool,
    pub has_kubernetes: bool,
    pub has_ci: bool,
}

#[must_use]
pub fn detect_infrastructure(key_files: &KeyFiles) -> InfrastructureFlags {
    let infrastructure = key_files.get(KeyFileCategory::Infrastructure);
    InfrastructureFlags {
        has_docker: !infrastructure.is_empty(),
        has_kubernetes: infrastructure.iter().any(|p| {
            let lower = p.to_lowercase();
            lower.contains("kubernetes") || lower.contains("k8s")
        }),
        has_ci: !key_files.get(KeyFileCategory::CiCd).is_empty(),
    }
}

/// Runs every inference rule over a scan using tables fixed at construction.
#[derive(Debug, Clone)]
pub struct Classifier {
    registry: LanguageRegistry,
    key_file_rules: KeyFileRules,
    project_tables: ProjectTables,
}

impl Classifier {
    #[must_use]
    pub fn new(
        registry: LanguageRegistry,
        key_file_rules: KeyFileRules,
        project_tables: ProjectTables,
    ) -> Self {
        Self {
            registry,
            key_file_rules,
            project_tables,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            LanguageRegistry::with_custom_languages(&config.languages),
            KeyFileRules::from_tables(&config.key_files),
            config.project.clone(),
        )
    }

    #[must_use]
    pub fn classify(&self, scan: &ScanOutput) -> Classification {
        let key_files = categorize_key_files(&scan.files, &self.key_file_rules);
        let primary_language = detect_primary_language(&scan.files, &self.registry);
        let tests = detect_test_framework(&scan.files, &primary_language);
        let project_type =
            infer_project_type(&scan.root_directories, &key_files, &self.project_tables);
        let infra = detect_infrastructure(&key_files);
        let conventions =
            detect_conventions(&scan.files, &primary_language, &scan.root_directories);

        tracing::debug!(
            language = %primary_language,
            framework = %tests.framework,
            project_type = %project_type,
            key_files = key_files.total(),
            "classified repository"
        );

        Classification {
            key_files,
            patterns: Patterns {
                primary_language,
                has_tests: tests.has_tests,
                test_framework: tests.framework,
                has_docker: infra.has_docker,
                has_kubernetes: infra.has_kubernetes,
                has_ci: infra.has_ci,
                project_type,
            },
            conventions,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
