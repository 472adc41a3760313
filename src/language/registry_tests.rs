use std::collections::BTreeMap;

use super::*;

#[test]
fn language_construction() {
    let lang = Language::new("kotlin", vec!["kt", "kts"]);
    assert_eq!(lang.name, "kotlin");
    assert_eq!(lang.extensions, vec!["kt", "kts"]);
}

#[test]
fn registry_register_and_lookup() {
    let mut registry = LanguageRegistry::new();
    registry.register(Language::new("shell", vec!["sh", "bash"]));

    assert_eq!(registry.get_by_extension("sh").unwrap().name, "shell");
    assert_eq!(registry.get_by_extension("bash").unwrap().name, "shell");
    assert!(registry.get_by_extension("zsh").is_none());
}

#[test]
fn registering_same_name_merges_extensions() {
    let mut registry = LanguageRegistry::new();
    registry.register(Language::new("python", vec!["py"]));
    registry.register(Language::new("python", vec!["pyi"]));

    assert_eq!(registry.languages.len(), 1);
    assert_eq!(registry.get_by_extension("pyi").unwrap().name, "python");
}

#[test]
fn default_registry_covers_built_in_languages() {
    let registry = LanguageRegistry::default();

    assert_eq!(registry.languages.len(), 12);
    assert_eq!(registry.get_by_extension("rs").unwrap().name, "rust");
    assert_eq!(registry.get_by_extension("cs").unwrap().name, "csharp");
    assert_eq!(registry.get_by_extension("cpp").unwrap().name, "cpp");
}

#[test]
fn extension_lookup_is_case_insensitive() {
    let registry = LanguageRegistry::default();
    assert_eq!(registry.get_by_extension("PY").unwrap().name, "python");
}

#[test]
fn lookup_by_path() {
    let registry = LanguageRegistry::default();

    assert_eq!(registry.get_by_path("cmd/main.go").unwrap().name, "go");
    assert_eq!(registry.get_by_path("web/App.TS").unwrap().name, "typescript");
    assert!(registry.get_by_path("Makefile").is_none());
    assert!(registry.get_by_path(".gitignore").is_none());
}

#[test]
fn custom_language_adds_new_extension() {
    let mut custom = BTreeMap::new();
    custom.insert(".kt".to_string(), "Kotlin".to_string());

    let registry = LanguageRegistry::with_custom_languages(&custom);

    assert_eq!(registry.get_by_extension("kt").unwrap().name, "kotlin");
    assert_eq!(registry.get_by_extension("rs").unwrap().name, "rust");
}

#[test]
fn custom_language_overrides_builtin_extension() {
    let mut custom = BTreeMap::new();
    custom.insert("h".to_string(), "c".to_string());
    custom.insert("c".to_string(), "cpp".to_string());

    let registry = LanguageRegistry::with_custom_languages(&custom);

    assert_eq!(registry.get_by_extension("h").unwrap().name, "c");
    assert_eq!(registry.get_by_extension("c").unwrap().name, "cpp");
}

#[test]
fn reassigned_extension_leaves_previous_language() {
    let mut custom = BTreeMap::new();
    custom.insert("js".to_string(), "typescript".to_string());

    let registry = LanguageRegistry::with_custom_languages(&custom);

    assert_eq!(registry.get_by_extension("js").unwrap().name, "typescript");
    let javascript = registry
        .languages
        .iter()
        .find(|l| l.name == "javascript")
        .unwrap();
    assert!(javascript.extensions.is_empty());
    let typescript = registry.get_by_extension("ts").unwrap();
    assert_eq!(typescript.extensions, vec!["ts", "js"]);
}
