use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Why a repository root was rejected before scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootProblem {
    Missing,
    NotADirectory,
}

impl std::fmt::Display for RootProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "does not exist"),
            Self::NotADirectory => write!(f, "is not a directory"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AgentsMdError {
    #[error("Repository path {problem}: {}", path.display())]
    InvalidRoot { path: PathBuf, problem: RootProblem },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Analysis file not found: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("Failed to read analysis file: {}", path.display())]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid analysis file: {}", path.display())]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unable to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl AgentsMdError {
    /// Short category name used as the headline of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRoot { .. } => "InvalidPath",
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_) => "Config",
            Self::ArtifactNotFound { .. } | Self::ArtifactRead { .. } => "Artifact",
            Self::ArtifactParse { .. } => "ArtifactFormat",
            Self::Write { .. } => "Write",
            Self::JsonSerialize(_) => "Serialization",
        }
    }

    /// One-line message naming the offending path or value.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Underlying cause, when one exists.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::ArtifactParse { source, .. } => Some(format!(
                "line {}, column {}: {source}",
                source.line(),
                source.column()
            )),
            Self::TomlParse(e) => Some(e.to_string()),
            Self::ConfigRead { source, .. }
            | Self::ArtifactRead { source, .. }
            | Self::Write { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable remediation hint.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRoot {
                problem: RootProblem::Missing,
                ..
            } => Some("Pass an existing repository directory, e.g. `agents-md scan .`"),
            Self::InvalidRoot {
                problem: RootProblem::NotADirectory,
                ..
            } => Some("Pass the repository root directory, not a file inside it"),
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or rerun with --no-config")
            }
            Self::ArtifactNotFound { .. } => {
                Some("Run `agents-md scan` first, or pass the artifact with --input")
            }
            Self::ArtifactParse { .. } => {
                Some("Regenerate the analysis file with `agents-md scan`")
            }
            Self::ConfigRead { source, .. }
            | Self::ArtifactRead { source, .. }
            | Self::Write { source, .. } => io_suggestion(source.kind()),
            Self::JsonSerialize(_) => None,
        }
    }
}

const fn io_suggestion(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::NotFound => Some("Check that the file path exists and its parent directory is present"),
        ErrorKind::PermissionDenied => Some("Check file permissions"),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, AgentsMdError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
