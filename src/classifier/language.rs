use std::collections::BTreeMap;

use crate::language::LanguageRegistry;

/// Reported when no file has a recognized extension.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Most common language among `files`.
///
/// Ties go to the lexicographically smallest language name so the result
/// never depends on iteration order.
#[must_use]
pub fn detect_primary_language(files: &[String], registry: &LanguageRegistry) -> String {
    let counts = count_languages(files, registry);

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in &counts {
        if best.is_none_or(|(_, top)| *count > top) {
            best = Some((name, *count));
        }
    }

    best.map_or_else(|| UNKNOWN_LANGUAGE.to_string(), |(name, _)| name.to_string())
}

/// Files per language, keyed by language name in sorted order.
#[must_use]
pub fn count_languages<'r>(
    files: &[String],
    registry: &'r LanguageRegistry,
) -> BTreeMap<&'r str, usize> {
    let mut counts = BTreeMap::new();
    for path in files {
        if let Some(language) = registry.get_by_path(path) {
            *counts.entry(language.name.as_str()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
