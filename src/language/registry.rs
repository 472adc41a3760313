use std::collections::{BTreeMap, HashMap};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Lowercase identifier stored in reports, e.g. `python`.
    pub name: String,
    pub extensions: Vec<String>,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
        }
    }
}

/// Extension to language lookup. Extensions are matched case-insensitively.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Registers a language; a later registration of an extension wins.
    pub fn register(&mut self, language: Language) {
        let idx = match self.languages.iter().position(|l| l.name == language.name) {
            Some(idx) => {
                let known = &mut self.languages[idx].extensions;
                for ext in &language.extensions {
                    if !known.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
                        known.push(ext.clone());
                    }
                }
                idx
            }
            None => {
                self.languages.push(language.clone());
                self.languages.len() - 1
            }
        };
        for ext in &language.extensions {
            let key = ext.to_ascii_lowercase();
            if let Some(prev) = self.extension_map.insert(key.clone(), idx)
                && prev != idx
            {
                self.languages[prev]
                    .extensions
                    .retain(|e| !e.eq_ignore_ascii_case(&key));
            }
        }
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(&ext.to_ascii_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    /// Language of a file, judged by its extension.
    #[must_use]
    pub fn get_by_path(&self, path: &str) -> Option<&Language> {
        let ext = Path::new(path).extension()?.to_str()?;
        self.get_by_extension(ext)
    }

    /// Built-in registry extended with `extension = language` pairs.
    #[must_use]
    pub fn with_custom_languages(custom: &BTreeMap<String, String>) -> Self {
        let mut registry = Self::default();

        for (ext, name) in custom {
            let ext = ext.trim_start_matches('.');
            registry.register(Language::new(&name.trim().to_ascii_lowercase(), vec![ext]));
        }

        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        for (name, ext) in [
            ("python", "py"),
            ("javascript", "js"),
            ("typescript", "ts"),
            ("go", "go"),
            ("rust", "rs"),
            ("java", "java"),
            ("ruby", "rb"),
            ("php", "php"),
            ("cpp", "cpp"),
            ("c", "c"),
            ("csharp", "cs"),
            ("swift", "swift"),
        ] {
            registry.register(Language::new(name, vec![ext]));
        }

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
