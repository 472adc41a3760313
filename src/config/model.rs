use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AgentsMdError, Result};
use crate::scanner::IgnoreSet;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default traversal depth when neither config nor CLI sets one.
pub const DEFAULT_MAX_DEPTH: usize = 5;

const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    "venv",
    ".venv",
    "__pycache__",
    ".git",
    ".specify",
    "dist",
    "build",
    ".eggs",
    "eggs",
    "lib64",
    ".tox",
    ".pytest_cache",
    ".mypy_cache",
    "htmlcov",
    "coverage",
    ".idea",
    ".vscode",
    "target",
    "bin",
    "obj",
    ".gradle",
    "vendor",
];

/// Root configuration, read from `.agents-md.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub key_files: KeyFileTables,

    /// Extra extension to language mappings, e.g. `kt = "kotlin"`.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    #[serde(default)]
    pub project: ProjectTables,
}

impl Config {
    /// Rejects values the pipeline cannot work with.
    ///
    /// # Errors
    /// Returns `AgentsMdError::Config` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        match &self.version {
            None => {}
            Some(v) if v == CONFIG_VERSION => {}
            Some(v) => {
                return Err(AgentsMdError::Config(format!(
                    "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
                )));
            }
        }

        for name in self
            .scanner
            .ignore_dirs
            .iter()
            .chain(&self.scanner.extra_ignore_dirs)
        {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(AgentsMdError::Config(format!(
                    "scanner ignore entry '{name}' must be a plain directory name"
                )));
            }
        }

        for (ext, language) in &self.languages {
            if ext.trim_start_matches('.').is_empty() || language.trim().is_empty() {
                return Err(AgentsMdError::Config(format!(
                    "languages entry '{ext}' = '{language}' needs both an extension and a name"
                )));
            }
        }

        Ok(())
    }
}

/// Traversal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Maximum directory depth to traverse (default: 5).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Directory names excluded from traversal. Replaces the built-in set.
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,

    /// Directory names added on top of `ignore_dirs`.
    #[serde(default)]
    pub extra_ignore_dirs: Vec<String>,
}

impl ScannerConfig {
    #[must_use]
    pub fn ignore_set(&self) -> IgnoreSet {
        self.ignore_dirs
            .iter()
            .chain(&self.extra_ignore_dirs)
            .cloned()
            .collect()
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ignore_dirs: default_ignore_dirs(),
            extra_ignore_dirs: Vec::new(),
        }
    }
}

/// Name tables behind key-file categorization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyFileTables {
    /// Exact file names.
    #[serde(default = "default_documentation")]
    pub documentation: Vec<String>,

    /// Exact file names.
    #[serde(default = "default_configuration")]
    pub configuration: Vec<String>,

    /// File name prefixes.
    #[serde(default = "default_infrastructure")]
    pub infrastructure: Vec<String>,

    /// Substrings of the relative path, so whole CI directories match.
    #[serde(default = "default_ci_cd")]
    pub ci_cd: Vec<String>,

    /// Exact file names.
    #[serde(default = "default_other")]
    pub other: Vec<String>,
}

impl Default for KeyFileTables {
    fn default() -> Self {
        Self {
            documentation: default_documentation(),
            configuration: default_configuration(),
            infrastructure: default_infrastructure(),
            ci_cd: default_ci_cd(),
            other: default_other(),
        }
    }
}

/// Directory and manifest names behind project-type inference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectTables {
    #[serde(default = "default_frontend_dirs")]
    pub frontend_dirs: Vec<String>,

    #[serde(default = "default_backend_dirs")]
    pub backend_dirs: Vec<String>,

    /// Configuration files that declare a package; more than one means a monorepo.
    #[serde(default = "default_package_manifests")]
    pub package_manifests: Vec<String>,

    #[serde(default = "default_library_manifests")]
    pub library_manifests: Vec<String>,

    #[serde(default = "default_source_dirs")]
    pub source_dirs: Vec<String>,
}

impl Default for ProjectTables {
    fn default() -> Self {
        Self {
            frontend_dirs: default_frontend_dirs(),
            backend_dirs: default_backend_dirs(),
            package_manifests: default_package_manifests(),
            library_manifests: default_library_manifests(),
            source_dirs: default_source_dirs(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

const fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_ignore_dirs() -> Vec<String> {
    strings(DEFAULT_IGNORE_DIRS)
}

fn default_documentation() -> Vec<String> {
    strings(&[
        "README.md",
        "CONTRIBUTING.md",
        "LICENSE",
        "CHANGELOG.md",
        "AUTHORS",
    ])
}

fn default_configuration() -> Vec<String> {
    strings(&[
        "package.json",
        "requirements.txt",
        ".env.example",
        "pyproject.toml",
        "setup.py",
        "setup.cfg",
        "Cargo.toml",
        "go.mod",
        "pom.xml",
        "build.gradle",
    ])
}

fn default_infrastructure() -> Vec<String> {
    strings(&[
        "Dockerfile",
        "docker-compose.yml",
        "docker-compose.yaml",
        "kubernetes.yml",
        "kubernetes.yaml",
    ])
}

fn default_ci_cd() -> Vec<String> {
    strings(&[
        ".github",
        ".gitlab-ci.yml",
        ".circleci",
        "Jenkinsfile",
        ".travis.yml",
    ])
}

fn default_other() -> Vec<String> {
    strings(&[".gitignore", ".dockerignore", "Makefile", ".editorconfig"])
}

fn default_frontend_dirs() -> Vec<String> {
    strings(&["frontend", "client", "web", "ui"])
}

fn default_backend_dirs() -> Vec<String> {
    strings(&["backend", "server", "api"])
}

fn default_package_manifests() -> Vec<String> {
    strings(&[
        "package.json",
        "Cargo.toml",
        "go.mod",
        "pyproject.toml",
        "pom.xml",
        "build.gradle",
    ])
}

fn default_library_manifests() -> Vec<String> {
    strings(&["setup.py", "Cargo.toml"])
}

fn default_source_dirs() -> Vec<String> {
    strings(&["src"])
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
