//! The `explain` use case: look up documentation sections.

use configtrace_types::{DocumentationSection, all_section_ids, lookup_section};

/// Output from the explain use case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExplainOutput {
    /// Found the section for the identifier.
    Found(DocumentationSection),
    /// Unknown identifier; includes the available section ids.
    NotFound {
        identifier: String,
        available: Vec<&'static str>,
    },
}

/// Look up a section by symbolic id or anchor.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match lookup_section(identifier) {
        Some(section) => ExplainOutput::Found(section),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available: all_section_ids(),
        },
    }
}

/// Format a section for terminal display.
pub fn format_explanation(section: DocumentationSection) -> String {
    let mut out = String::new();

    out.push_str(section.title());
    out.push('\n');
    out.push_str(&"=".repeat(section.title().len()));
    out.push_str("\n\n");
    out.push_str(section.summary());
    out.push_str("\n\n");
    out.push_str(&format!("Section: {}\n", section.id()));
    out.push_str(&format!("Anchor:  {}\n", section.anchor()));

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, available: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown documentation section: {}\n\n", identifier));
    out.push_str("Available sections:\n");
    for id in available {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}

/// One line per section: id, then anchor, columns aligned.
pub fn format_sections() -> String {
    let width = DocumentationSection::ALL
        .iter()
        .map(|section| section.id().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for section in DocumentationSection::ALL {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            section.id(),
            section.anchor(),
            width = width
        ));
    }
    out
}
