use std::fmt::Write;

use crate::classifier::KeyFileCategory;
use crate::report::ScanReport;

/// Root directories drawn in the tree.
pub const TREE_DIR_CAP: usize = 15;
/// Child directories drawn under each root directory.
pub const TREE_SUBDIR_CAP: usize = 5;
/// Paths listed per key-file category.
pub const KEY_FILE_CAP: usize = 5;
/// CI/CD entries listed, by file name.
pub const CI_FILE_CAP: usize = 3;

pub const EMPTY_STRUCTURE: &str = "(Empty or minimal repository structure)";
pub const NO_KEY_FILES: &str = "*No key files detected*";

/// Fenced directory tree rooted at the repository name.
#[must_use]
pub fn render_tree(report: &ScanReport) -> String {
    let dirs = &report.structure.root_directories;
    if dirs.is_empty() {
        return format!("```\n{EMPTY_STRUCTURE}\n```");
    }

    let mut out = String::from("```\n");
    writeln!(out, "{}/", report.repo_name()).ok();

    let shown = &dirs[..dirs.len().min(TREE_DIR_CAP)];
    for (i, dir) in shown.iter().enumerate() {
        let is_last = i + 1 == shown.len();
        let prefix = if is_last { "└── " } else { "├── " };

        if dir.file_count > 0 {
            writeln!(out, "{prefix}{}/  ({} files)", dir.name, dir.file_count).ok();
        } else {
            writeln!(out, "{prefix}{}/", dir.name).ok();
        }

        let subdirs = &dir.subdirs[..dir.subdirs.len().min(TREE_SUBDIR_CAP)];
        let continuation = if is_last { "    " } else { "│   " };
        for (j, subdir) in subdirs.iter().enumerate() {
            let sub_prefix = if j + 1 == subdirs.len() {
                "└── "
            } else {
                "├── "
            };
            writeln!(out, "{continuation}{sub_prefix}{subdir}/").ok();
        }
    }

    if dirs.len() > TREE_DIR_CAP {
        writeln!(out, "... ({} more directories)", dirs.len() - TREE_DIR_CAP).ok();
    }

    out.push_str("```");
    out
}

/// One bold-labelled line per non-empty key-file category.
#[must_use]
pub fn render_key_files(report: &ScanReport) -> String {
    let lines: Vec<String> = KeyFileCategory::ALL
        .iter()
        .filter_map(|&category| {
            let files = report.key_files.get(category);
            if files.is_empty() {
                return None;
            }
            let listed = if category == KeyFileCategory::CiCd {
                files
                    .iter()
                    .take(CI_FILE_CAP)
                    .map(|p| p.rsplit('/').next().unwrap_or(p))
                    .collect::<Vec<_>>()
                    .join(", ")
            } else {
                files
                    .iter()
                    .take(KEY_FILE_CAP)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            Some(format!("**{}**: {listed}", category.label()))
        })
        .collect();

    if lines.is_empty() {
        NO_KEY_FILES.to_string()
    } else {
        lines.join("\n\n")
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
