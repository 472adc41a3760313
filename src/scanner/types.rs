use std::ffi::OsStr;
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Directory names excluded from traversal, counting and output.
///
/// Insertion order is kept so the set reads back the way it was configured;
/// reports store the sorted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    names: IndexSet<String>,
}

impl IgnoreSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Matches a raw directory entry name; non UTF-8 names never match.
    #[must_use]
    pub fn matches(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.contains(n))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Summary of one directory directly under the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootDirectory {
    pub name: String,
    pub path: String,
    /// Recursive file count, independent of the traversal depth bound.
    pub file_count: usize,
    /// Recursive directory count, independent of the traversal depth bound.
    pub dir_count: usize,
    /// Direct child directory names, sorted and capped for display.
    pub subdirs: Vec<String>,
}

/// Non-fatal anomaly met during traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanWarning {
    /// Children of `path` were not visited because it sits at the depth bound.
    MaxDepthReached { path: String, depth: usize },
    /// An entry could not be read; the rest of the traversal went on.
    Unreadable { path: String, reason: String },
}

impl ScanWarning {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MaxDepthReached { path, .. } | Self::Unreadable { path, .. } => path,
        }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepthReached { path, depth } => {
                write!(f, "Max depth {depth} reached at: {path}")
            }
            Self::Unreadable { path, reason } => write!(f, "Skipped {path}: {reason}"),
        }
    }
}

/// Raw inventory produced by a scan, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub root_directories: Vec<RootDirectory>,
    /// Root-relative, `/`-separated paths of every regular file reached.
    pub files: Vec<String>,
    pub total_files: usize,
    pub total_dirs: usize,
    /// Deepest directory depth visited (root = 0).
    pub max_depth_reached: usize,
    pub warnings: Vec<ScanWarning>,
}
