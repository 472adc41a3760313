use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::{FileScanner, IgnoreSet, RootDirectory, ScanOutput, ScanWarning};
use crate::error::{AgentsMdError, Result, RootProblem};
use crate::output::ScanProgress;

/// Maximum number of child directory names kept per root directory.
pub const SUBDIR_DISPLAY_CAP: usize = 10;

/// Depth-bounded repository walker.
pub struct DirectoryScanner<'a> {
    ignore: &'a IgnoreSet,
    max_depth: usize,
    progress: Option<ScanProgress>,
}

impl<'a> DirectoryScanner<'a> {
    #[must_use]
    pub const fn new(ignore: &'a IgnoreSet, max_depth: usize) -> Self {
        Self {
            ignore,
            max_depth,
            progress: None,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ScanProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    fn walker(
        &self,
        dir: &Path,
    ) -> walkdir::FilterEntry<walkdir::IntoIter, impl FnMut(&walkdir::DirEntry) -> bool + use<'a>>
    {
        let ignore = self.ignore;
        WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| {
                e.depth() == 0 || !(e.file_type().is_dir() && ignore.matches(e.file_name()))
            })
    }

    fn scan_impl(&self, root: &Path) -> ScanOutput {
        let mut out = ScanOutput::default();
        let mut walker = self.walker(root);

        while let Some(next) = walker.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    out.warnings.push(unreadable(root, &err));
                    continue;
                }
            };

            let depth = entry.depth();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if depth > 0 {
                    out.total_dirs += 1;
                }
                out.max_depth_reached = out.max_depth_reached.max(depth);

                // Root-level summaries ignore the depth bound.
                if depth == 1 {
                    let summary = self.summarize_root_dir(root, entry.path(), &mut out.warnings);
                    out.root_directories.push(summary);
                }

                if depth >= self.max_depth {
                    tracing::debug!(path = %entry.path().display(), depth, "depth bound, pruning");
                    out.warnings.push(ScanWarning::MaxDepthReached {
                        path: relative_path(root, entry.path()),
                        depth,
                    });
                    walker.skip_current_dir();
                    continue;
                }
            } else if file_type.is_file() {
                out.files.push(relative_path(root, entry.path()));
                if let Some(progress) = &self.progress {
                    progress.inc();
                }
            }
        }

        out.total_files = out.files.len();
        out
    }

    /// Exact recursive counts for a root-level directory, ignoring the depth bound.
    fn summarize_root_dir(
        &self,
        root: &Path,
        dir: &Path,
        warnings: &mut Vec<ScanWarning>,
    ) -> RootDirectory {
        let mut file_count = 0;
        let mut dir_count = 0;
        let mut subdirs = Vec::new();

        for next in self.walker(dir) {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    // Errors within the bound are reported by the main walk.
                    if err.depth() + 1 >= self.max_depth {
                        warnings.push(unreadable(root, &err));
                    }
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_dir() {
                dir_count += 1;
                if entry.depth() == 1 && subdirs.len() < SUBDIR_DISPLAY_CAP {
                    subdirs.push(entry.file_name().to_string_lossy().into_owned());
                }
            } else if file_type.is_file() {
                file_count += 1;
            }
        }

        RootDirectory {
            name: dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: relative_path(root, dir),
            file_count,
            dir_count,
            subdirs,
        }
    }
}

impl FileScanner for DirectoryScanner<'_> {
    fn scan(&self, root: &Path) -> Result<ScanOutput> {
        validate_root(root)?;
        Ok(self.scan_impl(root))
    }
}

/// Rejects a root that is missing or not a directory.
///
/// # Errors
/// Returns `AgentsMdError::InvalidRoot` naming the problem.
pub fn validate_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(AgentsMdError::InvalidRoot {
            path: root.to_path_buf(),
            problem: RootProblem::NotADirectory,
        }),
        Err(_) => Err(AgentsMdError::InvalidRoot {
            path: root.to_path_buf(),
            problem: RootProblem::Missing,
        }),
    }
}

fn unreadable(root: &Path, err: &walkdir::Error) -> ScanWarning {
    let path = err
        .path()
        .map_or_else(|| ".".to_string(), |p| relative_path(root, p));
    let reason = err
        .io_error()
        .map_or_else(|| err.to_string(), ToString::to_string);
    tracing::warn!(%path, %reason, "skipping unreadable entry");
    ScanWarning::Unreadable { path, reason }
}

/// Root-relative path with `/` separators; the root itself is `.`.
#[must_use]
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    if rel.as_os_str().is_empty() {
        return ".".to_string();
    }
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
