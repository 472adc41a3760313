use super::*;

fn files(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn dirs(names: &[&str]) -> Vec<RootDirectory> {
    names
        .iter()
        .map(|name| RootDirectory {
            name: (*name).to_string(),
            path: (*name).to_string(),
            file_count: 1,
            dir_count: 0,
            subdirs: Vec::new(),
        })
        .collect()
}

#[test]
fn empty_inventory_detects_nothing() {
    let conventions = detect_conventions(&[], "unknown", &[]);
    assert!(conventions.detected_patterns.is_empty());
    assert!(conventions.notable_files.is_empty());
}

#[test]
fn dedicated_test_directory() {
    let conventions = detect_conventions(&files(&["tests/api.rs"]), "rust", &dirs(&["tests"]));
    assert_eq!(conventions.detected_patterns[0], "Tests in tests/ directory");

    let jest = detect_conventions(&files(&["__tests__/app.js"]), "javascript", &[]);
    assert!(
        jest.detected_patterns
            .contains(&"Tests in __tests__/ directory".to_string())
    );
}

#[test]
fn nested_test_directory_is_not_dedicated() {
    let conventions = detect_conventions(&files(&["pkg/tests/a.rs"]), "rust", &[]);
    assert!(conventions.detected_patterns.is_empty());
}

#[test]
fn python_naming_only_for_python() {
    let inventory = files(&["app/test_models.py"]);
    let python = detect_conventions(&inventory, "python", &[]);
    assert_eq!(
        python.detected_patterns,
        vec!["Python test files use test_*.py naming"]
    );

    let go = detect_conventions(&inventory, "go", &[]);
    assert!(go.detected_patterns.is_empty());
}

#[test]
fn go_naming() {
    let conventions = detect_conventions(&files(&["main.go", "main_test.go"]), "go", &[]);
    assert_eq!(
        conventions.detected_patterns,
        vec!["Go test files use *_test.go naming"]
    );
}

#[test]
fn typescript_uses_javascript_naming_sentence() {
    let conventions = detect_conventions(&files(&["src/app.spec.ts"]), "typescript", &[]);
    assert!(
        conventions
            .detected_patterns
            .iter()
            .any(|p| p.contains("*.test.js or *.spec.js"))
    );
}

#[test]
fn role_directories_in_fixed_order() {
    let conventions = detect_conventions(&[], "unknown", &dirs(&["docs", "lib", "scripts", "src"]));
    assert_eq!(
        conventions.detected_patterns,
        vec![
            "Source code in src/ directory",
            "Library code in lib/ directory",
            "Utility scripts in scripts/ directory",
            "Documentation in docs/ directory",
        ]
    );
}

#[test]
fn notable_files_keep_path_and_significance() {
    let inventory = files(&[".github/CODEOWNERS", "README.md", "tsconfig.json"]);
    let conventions = detect_conventions(&inventory, "typescript", &[]);

    let paths: Vec<_> = conventions
        .notable_files
        .iter()
        .map(|n| n.path.as_str())
        .collect();
    assert_eq!(paths, vec![".github/CODEOWNERS", "tsconfig.json"]);
    assert!(
        conventions
            .notable_files
            .iter()
            .all(|n| !n.significance.is_empty())
    );
}
