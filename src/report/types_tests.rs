use chrono::TimeZone;
use tempfile::TempDir;

use super::*;
use crate::classifier::{KeyFileCategory, NotableFile, ProjectType, TestFramework};

fn sample_report() -> ScanReport {
    let scan = ScanOutput {
        root_directories: vec![RootDirectory {
            name: "src".to_string(),
            path: "src".to_string(),
            file_count: 2,
            dir_count: 1,
            subdirs: vec!["bin".to_string()],
        }],
        files: vec![
            "Cargo.toml".to_string(),
            "src/lib.rs".to_string(),
            "src/bin/tool.rs".to_string(),
        ],
        total_files: 3,
        total_dirs: 2,
        max_depth_reached: 2,
        warnings: vec![
            ScanWarning::MaxDepthReached {
                path: "src/bin".to_string(),
                depth: 2,
            },
            ScanWarning::Unreadable {
                path: "secret".to_string(),
                reason: "Permission denied (os error 13)".to_string(),
            },
        ],
    };

    let mut key_files = KeyFiles::default();
    key_files.push(KeyFileCategory::Configuration, "Cargo.toml".to_string());

    let classification = Classification {
        key_files,
        patterns: Patterns {
            primary_language: "rust".to_string(),
            has_tests: true,
            test_framework: TestFramework::CargoTest,
            project_type: ProjectType::Library,
            ..Patterns::default()
        },
        conventions: Conventions {
            detected_patterns: vec!["Source code in src/ directory".to_string()],
            notable_files: vec![NotableFile {
                path: ".editorconfig".to_string(),
                significance: "Shared editor formatting rules".to_string(),
            }],
        },
    };

    let run = RunInfo {
        repo_root: PathBuf::from("/work/demo-repo"),
        max_depth: 2,
        ignored_dirs: vec![".git".to_string(), "target".to_string()],
        analyzed_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        analysis_duration_ms: 17,
    };

    ScanReport::assemble(scan, classification, run)
}

#[test]
fn assemble_merges_all_stages() {
    let report = sample_report();

    assert_eq!(report.metadata.analyzer_version, ANALYZER_VERSION);
    assert_eq!(report.metadata.repo_root, "/work/demo-repo");
    assert_eq!(report.metadata.total_files, 3);
    assert_eq!(report.metadata.total_dirs, 2);
    assert_eq!(report.structure.max_depth, 2);
    assert_eq!(report.structure.max_depth_reached, 2);
    assert_eq!(report.patterns.project_type, ProjectType::Library);
    assert_eq!(report.warnings.len(), 2);
}

#[test]
fn max_depth_reached_never_exceeds_bound() {
    let run = RunInfo {
        repo_root: PathBuf::from("/r"),
        max_depth: 1,
        ignored_dirs: Vec::new(),
        analyzed_at: Utc::now(),
        analysis_duration_ms: 0,
    };
    let scan = ScanOutput {
        max_depth_reached: 4,
        ..ScanOutput::default()
    };

    let report = ScanReport::assemble(scan, Classification::default(), run);
    assert_eq!(report.structure.max_depth_reached, 1);
}

#[test]
fn json_has_contract_keys() {
    let json: serde_json::Value =
        serde_json::from_str(&sample_report().to_json().unwrap()).unwrap();

    for key in [
        "metadata",
        "structure",
        "key_files",
        "patterns",
        "conventions",
        "warnings",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(json["metadata"]["analyzed_at"], "2026-01-02T03:04:05Z");
    assert_eq!(json["warnings"][0]["kind"], "max_depth_reached");
    assert_eq!(json["warnings"][1]["kind"], "unreadable");
    assert_eq!(json["key_files"]["ci_cd"], serde_json::json!([]));
}

#[test]
fn json_round_trip_is_lossless() {
    let report = sample_report();
    let parsed = ScanReport::from_json(&report.to_json().unwrap()).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("analysis.json");
    let report = sample_report();

    report.save(&path).unwrap();
    let loaded = ScanReport::load(&path).unwrap();

    assert_eq!(loaded, report);
}

#[test]
fn load_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = ScanReport::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, AgentsMdError::ArtifactNotFound { .. }));
}

#[test]
fn load_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ \"metadata\": ").unwrap();

    let err = ScanReport::load(&path).unwrap_err();
    assert!(matches!(err, AgentsMdError::ArtifactParse { .. }));
}

#[test]
fn load_rejects_json_missing_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, "{\"metadata\": {}}").unwrap();

    assert!(matches!(
        ScanReport::load(&path).unwrap_err(),
        AgentsMdError::ArtifactParse { .. }
    ));
}

#[test]
fn save_into_missing_directory_is_write_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("analysis.json");

    let err = sample_report().save(&path).unwrap_err();
    assert!(matches!(err, AgentsMdError::Write { .. }));
}

#[test]
fn repo_name_is_last_component() {
    let mut report = sample_report();
    assert_eq!(report.repo_name(), "demo-repo");

    report.metadata.repo_root = "/work/demo-repo/".to_string();
    assert_eq!(report.repo_name(), "demo-repo");

    report.metadata.repo_root = "C:\\code\\thing".to_string();
    assert_eq!(report.repo_name(), "thing");
}
