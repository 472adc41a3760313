use super::*;
use crate::classifier::{ProjectType, TestFramework};
use crate::synth::test_fixtures::empty_report;

#[test]
fn minimal_overview() {
    assert_eq!(
        render(&empty_report()),
        "This repository contains a software project."
    );
}

#[test]
fn all_clauses_in_fixed_order() {
    let mut report = empty_report();
    report.patterns.project_type = ProjectType::Api;
    report.patterns.primary_language = "python".to_string();
    report.patterns.has_tests = true;
    report.patterns.test_framework = TestFramework::Pytest;
    report.patterns.has_docker = true;
    report.patterns.has_kubernetes = true;
    report.patterns.has_ci = true;

    assert_eq!(
        render(&report),
        "This repository contains an API service built with Python. \
         Testing is implemented using pytest and includes Docker containerization \
         with Kubernetes orchestration with continuous integration configured."
    );
}

#[test]
fn testing_clause_needs_known_framework() {
    let mut report = empty_report();
    report.patterns.primary_language = "go".to_string();
    report.patterns.has_tests = true;

    assert_eq!(
        render(&report),
        "This repository contains a software project built with Go."
    );
}

#[test]
fn framework_without_tests_is_ignored() {
    let mut report = empty_report();
    report.patterns.test_framework = TestFramework::Jest;

    assert!(!render(&report).contains("Testing"));
}
