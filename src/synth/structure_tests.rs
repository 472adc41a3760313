use super::*;
use crate::synth::test_fixtures::{empty_report, root_dir};

#[test]
fn empty_structure_renders_placeholder() {
    assert_eq!(
        render_tree(&empty_report()),
        "```\n(Empty or minimal repository structure)\n```"
    );
}

#[test]
fn tree_with_connectors_and_counts() {
    let mut report = empty_report();
    report.structure.root_directories = vec![
        root_dir("docs", 0, &[]),
        root_dir("src", 4, &["bin", "util"]),
    ];

    let expected = "```\n\
                    empty/\n\
                    ├── docs/\n\
                    └── src/  (4 files)\n    \
                    ├── bin/\n    \
                    └── util/\n\
                    ```";
    assert_eq!(render_tree(&report), expected);
}

#[test]
fn non_last_root_dir_continues_the_rail() {
    let mut report = empty_report();
    report.structure.root_directories =
        vec![root_dir("a", 1, &["inner"]), root_dir("b", 0, &[])];

    let tree = render_tree(&report);
    assert!(tree.contains("├── a/  (1 files)\n│   └── inner/\n└── b/"));
}

#[test]
fn tree_caps_root_dirs_and_subdirs() {
    let mut report = empty_report();
    report.structure.root_directories = (0..18)
        .map(|i| root_dir(&format!("d{i:02}"), 0, &["s1", "s2", "s3", "s4", "s5", "s6"]))
        .collect();

    let tree = render_tree(&report);

    assert!(tree.contains("d14/"));
    assert!(!tree.contains("d15/"));
    assert!(tree.contains("... (3 more directories)"));
    assert!(tree.contains("s5/"));
    assert!(!tree.contains("s6/"));
    assert!(tree.contains("└── d14/"));
}

#[test]
fn no_key_files_placeholder() {
    assert_eq!(render_key_files(&empty_report()), NO_KEY_FILES);
}

#[test]
fn key_files_listed_per_category() {
    let mut report = empty_report();
    report.key_files.documentation = vec!["README.md".to_string(), "LICENSE".to_string()];
    report.key_files.ci_cd = vec![
        ".github/workflows/a.yml".to_string(),
        ".github/workflows/b.yml".to_string(),
        ".github/workflows/c.yml".to_string(),
        ".github/workflows/d.yml".to_string(),
    ];
    report.key_files.other = vec!["Makefile".to_string()];

    assert_eq!(
        render_key_files(&report),
        "**Documentation**: README.md, LICENSE\n\n\
         **CI/CD**: a.yml, b.yml, c.yml\n\n\
         **Other**: Makefile"
    );
}

#[test]
fn key_files_capped_at_five() {
    let mut report = empty_report();
    report.key_files.configuration = (0..7).map(|i| format!("pkg{i}/package.json")).collect();

    let rendered = render_key_files(&report);
    assert!(rendered.contains("pkg4/package.json"));
    assert!(!rendered.contains("pkg5/package.json"));
}
