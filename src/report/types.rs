use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::{Classification, Conventions, KeyFiles, Patterns};
use crate::error::{AgentsMdError, Result};
use crate::scanner::{RootDirectory, ScanOutput, ScanWarning};

/// Version stamped into every report and document.
pub const ANALYZER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default artifact location, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = ".agents_analysis.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub analyzed_at: DateTime<Utc>,
    pub analyzer_version: String,
    pub repo_root: String,
    pub total_files: usize,
    pub total_dirs: usize,
    pub analysis_duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub root_directories: Vec<RootDirectory>,
    /// Configured depth bound.
    pub max_depth: usize,
    /// Deepest directory actually visited; never above `max_depth`.
    pub max_depth_reached: usize,
    pub ignored_dirs: Vec<String>,
}

/// Facts about one scan run that the walk itself does not produce.
#[derive(Debug, Clone)]
pub struct RunInfo {
    pub repo_root: PathBuf,
    pub max_depth: usize,
    pub ignored_dirs: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
    pub analysis_duration_ms: u64,
}

/// The persisted contract between scanning and document synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub metadata: Metadata,
    pub structure: Structure,
    pub key_files: KeyFiles,
    pub patterns: Patterns,
    pub conventions: Conventions,
    pub warnings: Vec<ScanWarning>,
}

impl ScanReport {
    #[must_use]
    pub fn assemble(scan: ScanOutput, classification: Classification, run: RunInfo) -> Self {
        let Classification {
            key_files,
            patterns,
            conventions,
        } = classification;

        Self {
            metadata: Metadata {
                analyzed_at: run.analyzed_at,
                analyzer_version: ANALYZER_VERSION.to_string(),
                repo_root: run.repo_root.display().to_string(),
                total_files: scan.total_files,
                total_dirs: scan.total_dirs,
                analysis_duration_ms: run.analysis_duration_ms,
            },
            structure: Structure {
                root_directories: scan.root_directories,
                max_depth: run.max_depth,
                max_depth_reached: scan.max_depth_reached.min(run.max_depth),
                ignored_dirs: run.ignored_dirs,
            },
            key_files,
            patterns,
            conventions,
            warnings: scan.warnings,
        }
    }

    /// Final path component of the scanned root, used to label the tree.
    #[must_use]
    pub fn repo_name(&self) -> &str {
        self.metadata
            .repo_root
            .trim_end_matches(['/', '\\'])
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(".")
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    /// Returns an error if `json` is not a valid report.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a report from a JSON file.
    ///
    /// # Errors
    /// Returns `ArtifactNotFound` for a missing file, `ArtifactRead` for other
    /// read failures and `ArtifactParse` for malformed content.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AgentsMdError::ArtifactNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                AgentsMdError::ArtifactRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| AgentsMdError::ArtifactParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `Write` if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        let write_err = |source| AgentsMdError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = fs::File::create(path).map_err(write_err)?;
        write_json(BufWriter::new(file), &json).map_err(write_err)
    }
}

fn write_json(mut writer: impl Write, json: &str) -> io::Result<()> {
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
