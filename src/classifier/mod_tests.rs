use std::collections::BTreeMap;

use super::*;
use crate::scanner::RootDirectory;

fn scan_of(files: &[&str], dirs: &[&str]) -> ScanOutput {
    let files: Vec<String> = files.iter().map(|s| (*s).to_string()).collect();
    ScanOutput {
        root_directories: dirs
            .iter()
            .map(|name| RootDirectory {
                name: (*name).to_string(),
                path: (*name).to_string(),
                file_count: 0,
                dir_count: 0,
                subdirs: Vec::new(),
            })
            .collect(),
        total_files: files.len(),
        files,
        ..ScanOutput::default()
    }
}

#[test]
fn empty_scan_classifies_as_unknown() {
    let classification = Classifier::default().classify(&ScanOutput::default());

    assert_eq!(classification.patterns, Patterns::default());
    assert!(classification.key_files.is_empty());
    assert!(classification.conventions.detected_patterns.is_empty());
}

#[test]
fn go_tree_gains_tests_when_test_file_added() {
    let classifier = Classifier::default();

    let plain = classifier.classify(&scan_of(&["main.go", "cmd/tool.go"], &["cmd"]));
    assert_eq!(plain.patterns.primary_language, "go");
    assert!(!plain.patterns.has_tests);
    assert_eq!(plain.patterns.test_framework, TestFramework::Unknown);

    let with_test =
        classifier.classify(&scan_of(&["main.go", "cmd/tool.go", "x_test.go"], &["cmd"]));
    assert_eq!(with_test.patterns.primary_language, "go");
    assert!(with_test.patterns.has_tests);
    assert_eq!(with_test.patterns.test_framework, TestFramework::GoTest);
}

#[test]
fn frontend_backend_beats_library_manifest() {
    let classification = Classifier::default().classify(&scan_of(
        &["Cargo.toml", "backend/main.rs", "frontend/app.ts"],
        &["backend", "frontend"],
    ));
    assert_eq!(classification.patterns.project_type, ProjectType::WebApp);
}

#[test]
fn two_manifests_without_web_pair_is_monorepo() {
    let classification = Classifier::default().classify(&scan_of(
        &["svc/go.mod", "ui-kit/package.json"],
        &["svc", "ui-kit"],
    ));
    assert_eq!(classification.patterns.project_type, ProjectType::Monorepo);
}

#[test]
fn infrastructure_flags() {
    let classification = Classifier::default().classify(&scan_of(
        &[
            "Dockerfile",
            "deploy/k8s/kubernetes.yaml",
            ".github/workflows/ci.yml",
        ],
        &[".github", "deploy"],
    ));

    assert!(classification.patterns.has_docker);
    assert!(classification.patterns.has_kubernetes);
    assert!(classification.patterns.has_ci);
}

#[test]
fn docker_without_kubernetes() {
    let mut key_files = KeyFiles::default();
    key_files.push(KeyFileCategory::Infrastructure, "Dockerfile".to_string());

    let flags = detect_infrastructure(&key_files);
    assert!(flags.has_docker);
    assert!(!flags.has_kubernetes);
    assert!(!flags.has_ci);
}

#[test]
fn config_languages_feed_the_registry() {
    let mut languages = BTreeMap::new();
    languages.insert("kt".to_string(), "kotlin".to_string());
    let config = Config {
        languages,
        ..Config::default()
    };

    let classification =
        Classifier::from_config(&config).classify(&scan_of(&["a.kt", "b.kt", "c.py"], &[]));
    assert_eq!(classification.patterns.primary_language, "kotlin");
}

#[test]
fn patterns_serialize_with_wire_names() {
    let patterns = Patterns {
        test_framework: TestFramework::CargoTest,
        project_type: ProjectType::SingleProject,
        ..Patterns::default()
    };
    let json = serde_json::to_value(&patterns).unwrap();

    assert_eq!(json["test_framework"], "cargo-test");
    assert_eq!(json["project_type"], "single-project");
    assert_eq!(json["primary_language"], "unknown");
}
