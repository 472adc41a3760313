use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::KeyFileTables;

/// Fixed key-file categories, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyFileCategory {
    Documentation,
    Configuration,
    Infrastructure,
    CiCd,
    Other,
}

impl KeyFileCategory {
    pub const ALL: [Self; 5] = [
        Self::Documentation,
        Self::Configuration,
        Self::Infrastructure,
        Self::CiCd,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Documentation => "Documentation",
            Self::Configuration => "Configuration",
            Self::Infrastructure => "Infrastructure",
            Self::CiCd => "CI/CD",
            Self::Other => "Other",
        }
    }
}

/// How a rule compares its names against a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// File name equals one of the names.
    ExactName,
    /// File name starts with one of the names.
    NamePrefix,
    /// Relative path contains one of the names anywhere, directories included.
    PathSubstring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFileRule {
    pub category: KeyFileCategory,
    pub kind: MatchKind,
    pub names: Vec<String>,
}

impl KeyFileRule {
    #[must_use]
    pub fn matches(&self, path: &str, file_name: &str) -> bool {
        match self.kind {
            MatchKind::ExactName => self.names.iter().any(|n| file_name == n),
            MatchKind::NamePrefix => self.names.iter().any(|n| file_name.starts_with(n.as_str())),
            MatchKind::PathSubstring => self.names.iter().any(|n| path.contains(n.as_str())),
        }
    }
}

/// Ordered rule table; the first matching rule decides a file's category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFileRules {
    rules: Vec<KeyFileRule>,
}

impl KeyFileRules {
    #[must_use]
    pub fn new(rules: Vec<KeyFileRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn from_tables(tables: &KeyFileTables) -> Self {
        let rule = |category, kind, names: &Vec<String>| KeyFileRule {
            category,
            kind,
            names: names.clone(),
        };

        Self::new(vec![
            rule(
                KeyFileCategory::Documentation,
                MatchKind::ExactName,
                &tables.documentation,
            ),
            rule(
                KeyFileCategory::Configuration,
                MatchKind::ExactName,
                &tables.configuration,
            ),
            rule(
                KeyFileCategory::Infrastructure,
                MatchKind::NamePrefix,
                &tables.infrastructure,
            ),
            rule(KeyFileCategory::CiCd, MatchKind::PathSubstring, &tables.ci_cd),
            rule(KeyFileCategory::Other, MatchKind::ExactName, &tables.other),
        ])
    }

    #[must_use]
    pub fn categorize(&self, path: &str) -> Option<KeyFileCategory> {
        let file_name = file_name(path);
        self.rules
            .iter()
            .find(|rule| rule.matches(path, file_name))
            .map(|rule| rule.category)
    }
}

impl Default for KeyFileRules {
    fn default() -> Self {
        Self::from_tables(&KeyFileTables::default())
    }
}

/// Key files grouped by category, each list in inventory order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFiles {
    pub documentation: Vec<String>,
    pub configuration: Vec<String>,
    pub infrastructure: Vec<String>,
    pub ci_cd: Vec<String>,
    pub other: Vec<String>,
}

impl KeyFiles {
    #[must_use]
    pub fn get(&self, category: KeyFileCategory) -> &[String] {
        match category {
            KeyFileCategory::Documentation => &self.documentation,
            KeyFileCategory::Configuration => &self.configuration,
            KeyFileCategory::Infrastructure => &self.infrastructure,
            KeyFileCategory::CiCd => &self.ci_cd,
            KeyFileCategory::Other => &self.other,
        }
    }

    pub fn push(&mut self, category: KeyFileCategory, path: String) {
        let list = match category {
            KeyFileCategory::Documentation => &mut self.documentation,
            KeyFileCategory::Configuration => &mut self.configuration,
            KeyFileCategory::Infrastructure => &mut self.infrastructure,
            KeyFileCategory::CiCd => &mut self.ci_cd,
            KeyFileCategory::Other => &mut self.other,
        };
        list.push(path);
    }

    #[must_use]
    pub fn total(&self) -> usize {
        KeyFileCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Whether any file in `category` has one of `names` as its file name.
    #[must_use]
    pub fn has_file_named(&self, category: KeyFileCategory, names: &[String]) -> bool {
        self.get(category)
            .iter()
            .any(|p| names.iter().any(|n| file_name(p) == n))
    }
}

/// Sorts every inventory file into at most one category; unmatched files are dropped.
#[must_use]
pub fn categorize_key_files(files: &[String], rules: &KeyFileRules) -> KeyFiles {
    let mut key_files = KeyFiles::default();
    for path in files {
        if let Some(category) = rules.categorize(path) {
            key_files.push(category, path.clone());
        }
    }
    key_files
}

pub(crate) fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
#[path = "key_files_tests.rs"]
mod tests;
