use std::fmt;

use serde::{Deserialize, Serialize};

use super::key_files::{KeyFileCategory, KeyFiles, file_name};
use crate::config::ProjectTables;
use crate::scanner::RootDirectory;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    WebApp,
    Monorepo,
    Library,
    Api,
    SingleProject,
    #[default]
    Unknown,
}

impl ProjectType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WebApp => "web-app",
            Self::Monorepo => "monorepo",
            Self::Library => "library",
            Self::Api => "api",
            Self::SingleProject => "single-project",
            Self::Unknown => "unknown",
        }
    }

    /// Noun phrase used in prose, e.g. "a web application".
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::WebApp => "a web application",
            Self::Monorepo => "a monorepo",
            Self::Library => "a software library",
            Self::Api => "an API service",
            Self::SingleProject | Self::Unknown => "a software project",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a project-type rule gets to look at.
pub struct ProjectSignals<'a> {
    pub root_dirs: &'a [RootDirectory],
    pub key_files: &'a KeyFiles,
    pub tables: &'a ProjectTables,
}

impl ProjectSignals<'_> {
    fn has_root_dir(&self, names: &[String]) -> bool {
        self.root_dirs
            .iter()
            .any(|dir| names.iter().any(|n| *n == dir.name))
    }

    fn manifest_count(&self) -> usize {
        self.key_files
            .get(KeyFileCategory::Configuration)
            .iter()
            .filter(|p| self.tables.package_manifests.iter().any(|m| file_name(p) == m))
            .count()
    }
}

/// One link in the project-type chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTypeRule {
    /// Both a frontend-like and a backend-like root directory.
    FrontendAndBackend,
    /// More than one package manifest among configuration key files.
    MultipleManifests,
    /// A library-style manifest.
    LibraryManifest,
    /// A backend-like root directory, or a configuration file under an `api` path.
    ApiSurface,
    /// A conventional source root directory.
    SourceRoot,
}

impl ProjectTypeRule {
    /// Evaluation order; the first rule that matches decides the type.
    pub const CHAIN: [Self; 5] = [
        Self::FrontendAndBackend,
        Self::MultipleManifests,
        Self::LibraryManifest,
        Self::ApiSurface,
        Self::SourceRoot,
    ];

    #[must_use]
    pub const fn project_type(self) -> ProjectType {
        match self {
            Self::FrontendAndBackend => ProjectType::WebApp,
            Self::MultipleManifests => ProjectType::Monorepo,
            Self::LibraryManifest => ProjectType::Library,
            Self::ApiSurface => ProjectType::Api,
            Self::SourceRoot => ProjectType::SingleProject,
        }
    }

    #[must_use]
    pub fn matches(self, signals: &ProjectSignals<'_>) -> bool {
        let tables = signals.tables;
        match self {
            Self::FrontendAndBackend => {
                signals.has_root_dir(&tables.frontend_dirs)
                    && signals.has_root_dir(&tables.backend_dirs)
            }
            Self::MultipleManifests => signals.manifest_count() > 1,
            Self::LibraryManifest => signals
                .key_files
                .has_file_named(KeyFileCategory::Configuration, &tables.library_manifests),
            Self::ApiSurface => {
                signals.has_root_dir(&tables.backend_dirs)
                    || signals
                        .key_files
                        .get(KeyFileCategory::Configuration)
                        .iter()
                        .any(|p| p.contains("api"))
            }
            Self::SourceRoot => signals.has_root_dir(&tables.source_dirs),
        }
    }
}

#[must_use]
pub fn infer_project_type(
    root_dirs: &[RootDirectory],
    key_files: &KeyFiles,
    tables: &ProjectTables,
) -> ProjectType {
    let signals = ProjectSignals {
        root_dirs,
        key_files,
        tables,
    };

    ProjectTypeRule::CHAIN
        .iter()
        .find(|rule| rule.matches(&signals))
        .map_or(ProjectType::Unknown, |rule| rule.project_type())
}

#[cfg(test)]
#[path = "project_type_tests.rs"]
mod tests;
