//! Rendering utilities for problem reports (plain text, Markdown, GitHub annotations).
//!
//! Renderers work on a string-only model so they stay independent of the domain types.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    OutputFormat, RenderOptions, RenderableDocumentation, RenderableProblem, RenderableReport,
};
pub use text::render_text;

/// Render a report in the requested format.
pub fn render(report: &RenderableReport, format: OutputFormat, options: &RenderOptions) -> String {
    match format {
        OutputFormat::Text => render_text(report, options),
        OutputFormat::Markdown => render_markdown(report, options),
        OutputFormat::Github => {
            let mut out = render_github_annotations(report).join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            out
        }
    }
}

/// Problems grouped by owning user code, in first-seen order.
pub(crate) fn group_by_user_code(
    problems: &[RenderableProblem],
) -> Vec<(&str, Vec<&RenderableProblem>)> {
    let mut groups: Vec<(&str, Vec<&RenderableProblem>)> = Vec::new();
    for problem in problems {
        match groups
            .iter_mut()
            .find(|(owner, _)| *owner == problem.user_code.as_str())
        {
            Some((_, members)) => members.push(problem),
            None => groups.push((problem.user_code.as_str(), vec![problem])),
        }
    }
    groups
}
