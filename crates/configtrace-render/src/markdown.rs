use crate::{RenderOptions, RenderableProblem, RenderableReport, group_by_user_code};

pub fn render_markdown(report: &RenderableReport, options: &RenderOptions) -> String {
    let mut out = String::new();

    out.push_str("# Configuration cache problems\n\n");
    out.push_str(&format!(
        "- Problems: {} (emitted) / {} (total)\n\n",
        report.problems.len(),
        report.problems_total
    ));

    if let Some(r) = &report.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.problems_total == 0 {
        out.push_str("No problems found.\n");
        return out;
    }
    if report.problems.is_empty() {
        return out;
    }

    if options.group_by_user_code {
        for (owner, members) in group_by_user_code(&report.problems) {
            out.push_str(&format!("## {}\n\n", owner));
            for p in members {
                push_problem(&mut out, p, options);
            }
            out.push('\n');
        }
    } else {
        out.push_str("## Problems\n\n");
        for p in &report.problems {
            push_problem(&mut out, p, options);
        }
    }

    out
}

fn push_problem(out: &mut String, p: &RenderableProblem, options: &RenderOptions) {
    out.push_str(&format!("- {}: {}\n", p.trace, p.message));
    if let Some(doc) = &p.documentation {
        out.push_str(&format!("  - docs: `{}`\n", doc.anchor));
    }
    if options.show_failures {
        for failure in &p.failures {
            out.push_str("  - failure:\n\n    ```text\n");
            for line in failure.lines() {
                out.push_str(&format!("    {}\n", line));
            }
            out.push_str("    ```\n\n");
        }
    }
}
