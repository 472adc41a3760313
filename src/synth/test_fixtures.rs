//! Report builders shared by the synthesizer tests.

use chrono::{TimeZone, Utc};

use crate::classifier::{Conventions, KeyFiles, Patterns};
use crate::report::{ANALYZER_VERSION, Metadata, ScanReport, Structure};
use crate::scanner::RootDirectory;

/// Report for an empty repository rooted at `/work/empty`.
pub fn empty_report() -> ScanReport {
    ScanReport {
        metadata: Metadata {
            analyzed_at: Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap(),
            analyzer_version: ANALYZER_VERSION.to_string(),
            repo_root: "/work/empty".to_string(),
            total_files: 0,
            total_dirs: 0,
            analysis_duration_ms: 1,
        },
        structure: Structure {
            root_directories: Vec::new(),
            max_depth: 5,
            max_depth_reached: 0,
            ignored_dirs: vec![".git".to_string()],
        },
        key_files: KeyFiles::default(),
        patterns: Patterns::default(),
        conventions: Conventions::default(),
        warnings: Vec::new(),
    }
}

pub fn root_dir(name: &str, file_count: usize, subdirs: &[&str]) -> RootDirectory {
    RootDirectory {
        name: name.to_string(),
        path: name.to_string(),
        file_count,
        dir_count: subdirs.len(),
        subdirs: subdirs.iter().map(|s| (*s).to_string()).collect(),
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
