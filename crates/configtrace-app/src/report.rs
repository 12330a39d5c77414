//! The `report` use case: read a problem set, drop duplicates, truncate, and render.

use anyhow::Context;
use configtrace_domain::{PropertyProblem, problems_from_set};
use configtrace_render::{RenderableDocumentation, RenderableProblem, RenderableReport};
use configtrace_settings::{ConfigtraceConfigV1, Overrides, ResolvedConfig};
use configtrace_types::ProblemSetV1;
use std::collections::HashSet;
use tracing::{debug, info};

/// Input for the report use case.
#[derive(Clone, Debug)]
pub struct ReportInput<'a> {
    /// Problem set JSON (`configtrace.problems.v1`).
    pub input_json: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the report use case.
#[derive(Clone, Debug)]
pub struct ReportOutput {
    /// The report in the resolved output format.
    pub rendered: String,
    /// The string-only model the output was rendered from.
    pub report: RenderableReport,
    /// Problems that made it into the report, in input order.
    pub problems: Vec<PropertyProblem>,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the report use case: parse config and problem set, dedupe, truncate, render.
pub fn run_report(input: ReportInput<'_>) -> anyhow::Result<ReportOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        ConfigtraceConfigV1::default()
    } else {
        configtrace_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = configtrace_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    debug!(
        profile = %resolved.profile,
        format = ?resolved.format,
        max_problems = ?resolved.max_problems,
        dedupe = resolved.dedupe,
        "resolved config"
    );

    let mut problems = parse_problem_set(input.input_json)?;
    let read = problems.len();
    if resolved.dedupe {
        problems = dedupe_problems(problems);
        if problems.len() < read {
            debug!(dropped = read - problems.len(), "dropped duplicate problems");
        }
    }

    let total = problems.len();
    let truncated_reason = truncate_problems(&mut problems, resolved.max_problems);
    let report = to_renderable(
        &problems,
        u32::try_from(total).unwrap_or(u32::MAX),
        truncated_reason,
    );
    let rendered = configtrace_render::render(&report, resolved.format, &resolved.options);

    info!(
        emitted = report.problems.len(),
        total,
        "rendered configuration problems"
    );

    Ok(ReportOutput {
        rendered,
        report,
        problems,
        resolved_config: resolved,
    })
}

/// Parse and validate a problem set document.
pub fn parse_problem_set(text: &str) -> anyhow::Result<Vec<PropertyProblem>> {
    let set: ProblemSetV1 = serde_json::from_str(text).context("parse problem set json")?;
    let problems = problems_from_set(&set).context("convert problem set")?;
    debug!(schema = %set.schema, count = problems.len(), "parsed problem set");
    Ok(problems)
}

/// Drop every problem equal to one seen earlier. The first occurrence keeps its position.
pub fn dedupe_problems(problems: Vec<PropertyProblem>) -> Vec<PropertyProblem> {
    let mut seen = HashSet::with_capacity(problems.len());
    problems
        .into_iter()
        .filter(|problem| seen.insert(problem.clone()))
        .collect()
}

/// Keep at most `max` problems. Returns the truncation note when anything was dropped.
pub fn truncate_problems(
    problems: &mut Vec<PropertyProblem>,
    max: Option<usize>,
) -> Option<String> {
    let max = max?;
    if problems.len() <= max {
        return None;
    }
    problems.truncate(max);
    Some(format!("problems truncated to max_problems={max}"))
}

pub fn to_renderable(
    problems: &[PropertyProblem],
    problems_total: u32,
    truncated_reason: Option<String>,
) -> RenderableReport {
    RenderableReport {
        problems: problems.iter().map(renderable_problem).collect(),
        problems_total,
        truncated_reason,
    }
}

fn renderable_problem(problem: &PropertyProblem) -> RenderableProblem {
    let mut failures = Vec::new();
    if let Some(exception) = problem.exception() {
        let text = exception
            .causes()
            .enumerate()
            .map(|(i, failure)| {
                if i == 0 {
                    failure.to_string()
                } else {
                    format!("Caused by: {failure}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        failures.push(text);
    }
    if let Some(stack) = problem.stack_tracing_failure() {
        failures.push(stack.render());
    }

    RenderableProblem {
        trace: problem.trace().render(),
        message: problem.message().render(),
        user_code: problem.user_code(),
        documentation: problem
            .documentation_section()
            .map(|section| RenderableDocumentation {
                id: section.id().to_string(),
                anchor: section.anchor().to_string(),
            }),
        failures,
        fingerprint: problem.fingerprint(),
    }
}
