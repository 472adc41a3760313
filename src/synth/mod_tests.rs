use tempfile::TempDir;

use super::*;
use crate::synth::test_fixtures::empty_report;

#[test]
fn display_language_capitalizes() {
    assert_eq!(display_language("python"), "Python");
    assert_eq!(display_language("csharp"), "Csharp");
    assert_eq!(display_language(""), "");
}

#[test]
fn synthesize_matches_document_render() {
    let report = empty_report();
    assert_eq!(synthesize(&report), Document::from_report(&report).render());
}

#[test]
fn write_document_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("AGENTS.md");

    write_document(&path, "# AGENTS.md\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "# AGENTS.md\n");
}

#[test]
fn write_document_into_missing_dir_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("AGENTS.md");

    let err = write_document(&path, "x").unwrap_err();
    assert!(matches!(err, AgentsMdError::Write { .. }));
    assert_eq!(err.error_type(), "Write");
}
