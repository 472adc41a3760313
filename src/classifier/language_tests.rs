use super::*;

fn files(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn no_recognized_files_is_unknown() {
    let registry = LanguageRegistry::default();
    assert_eq!(detect_primary_language(&[], &registry), UNKNOWN_LANGUAGE);
    assert_eq!(
        detect_primary_language(&files(&["README.md", "Makefile"]), &registry),
        UNKNOWN_LANGUAGE
    );
}

#[test]
fn majority_language_wins() {
    let registry = LanguageRegistry::default();
    let inventory = files(&["a.py", "b.py", "c.js", "setup.cfg"]);
    assert_eq!(detect_primary_language(&inventory, &registry), "python");
}

#[test]
fn go_only_tree_is_go() {
    let registry = LanguageRegistry::default();
    let inventory = files(&["main.go", "cmd/server/server.go"]);
    assert_eq!(detect_primary_language(&inventory, &registry), "go");
}

#[test]
fn tie_goes_to_smallest_name() {
    let registry = LanguageRegistry::default();
    let inventory = files(&["a.rs", "b.go", "c.py"]);
    assert_eq!(detect_primary_language(&inventory, &registry), "go");

    let reversed = files(&["c.py", "b.go", "a.rs"]);
    assert_eq!(detect_primary_language(&reversed, &registry), "go");
}

#[test]
fn tie_is_broken_independent_of_registration_order() {
    let registry = LanguageRegistry::default();
    // typescript is registered before rust but loses the tie by name
    let inventory = files(&["x.ts", "y.rs"]);
    assert_eq!(detect_primary_language(&inventory, &registry), "rust");
}

#[test]
fn extension_case_is_ignored() {
    let registry = LanguageRegistry::default();
    let inventory = files(&["A.JAVA", "B.Java", "c.py"]);
    assert_eq!(detect_primary_language(&inventory, &registry), "java");
}

#[test]
fn count_languages_reports_each_language() {
    let registry = LanguageRegistry::default();
    let counts = count_languages(&files(&["a.c", "b.c", "c.cpp"]), &registry);
    assert_eq!(counts.get("c"), Some(&2));
    assert_eq!(counts.get("cpp"), Some(&1));
}
