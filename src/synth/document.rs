use std::fmt::Write;

use chrono::SecondsFormat;

use super::{conventions, getting_started, guidelines, overview, structure};
use crate::report::ScanReport;

pub const DOCUMENT_TITLE: &str = "# AGENTS.md";

pub const DOCUMENT_FOOTER: &str = "*This file was automatically generated by agents-md. \
To regenerate after structural changes, run `agents-md scan` and `agents-md synthesize` again.*";

/// Named document sections, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Overview,
    Structure,
    KeyFiles,
    Conventions,
    GettingStarted,
    Guidelines,
}

impl SectionKind {
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Structure,
        Self::KeyFiles,
        Self::Conventions,
        Self::GettingStarted,
        Self::Guidelines,
    ];

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Overview => "## Project Overview",
            Self::Structure => "## Project Structure",
            Self::KeyFiles => "### Key Files",
            Self::Conventions => "## Key Conventions",
            Self::GettingStarted => "## Getting Started",
            Self::Guidelines => "## AI Agent Guidelines",
        }
    }

    /// Template placeholder name, used as `{{name}}`.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Overview => "project_overview",
            Self::Structure => "project_structure",
            Self::KeyFiles => "key_files",
            Self::Conventions => "conventions",
            Self::GettingStarted => "getting_started",
            Self::Guidelines => "agent_guidelines",
        }
    }

    fn render_body(self, report: &ScanReport) -> String {
        match self {
            Self::Overview => overview::render(report),
            Self::Structure => structure::render_tree(report),
            Self::KeyFiles => structure::render_key_files(report),
            Self::Conventions => conventions::render(report),
            Self::GettingStarted => getting_started::render(report),
            Self::Guidelines => guidelines::render(report),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub body: String,
}

/// Onboarding document derived from a single report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub generated_at: String,
    pub analyzer_version: String,
    pub sections: Vec<Section>,
}

impl Document {
    #[must_use]
    pub fn from_report(report: &ScanReport) -> Self {
        let sections = SectionKind::ALL
            .iter()
            .map(|&kind| Section {
                kind,
                body: kind.render_body(report),
            })
            .collect();

        Self {
            generated_at: report
                .metadata
                .analyzed_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            analyzer_version: report.metadata.analyzer_version.clone(),
            sections,
        }
    }

    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    fn body(&self, kind: SectionKind) -> &str {
        self.section(kind).map_or("", |s| s.body.as_str())
    }

    /// Built-in Markdown layout.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "{DOCUMENT_TITLE}\n").ok();
        writeln!(out, "**Generated**: {}", self.generated_at).ok();
        writeln!(out, "**Analyzer Version**: {}\n", self.analyzer_version).ok();

        for section in &self.sections {
            writeln!(out, "{}\n\n{}\n", section.kind.heading(), section.body).ok();
        }

        writeln!(out, "---\n\n{DOCUMENT_FOOTER}").ok();
        out
    }

    /// Substitutes `{{name}}` placeholders in `template`; unknown names stay as written.
    #[must_use]
    pub fn render_with_template(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                rest = &rest[start..];
                break;
            };

            let name = after[..end].trim();
            match self.placeholder_value(name) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }

    fn placeholder_value(&self, name: &str) -> Option<&str> {
        match name {
            "generated_at" => Some(&self.generated_at),
            "analyzer_version" => Some(&self.analyzer_version),
            _ => SectionKind::ALL
                .iter()
                .find(|kind| kind.placeholder() == name)
                .map(|&kind| self.body(kind)),
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
