use crate::{RenderOptions, RenderableProblem, RenderableReport, group_by_user_code};

/// Console rendering: one bullet per problem, optionally grouped by owning user code.
pub fn render_text(report: &RenderableReport, options: &RenderOptions) -> String {
    let mut out = String::new();

    if report.problems_total == 0 {
        out.push_str("No problems found.\n");
        return out;
    }

    let noun = if report.problems_total == 1 {
        "problem was"
    } else {
        "problems were"
    };
    out.push_str(&format!(
        "{} {} found storing the configuration cache.\n",
        report.problems_total, noun
    ));

    if options.group_by_user_code {
        for (owner, members) in group_by_user_code(&report.problems) {
            out.push_str(&format!("- {}:\n", owner));
            for problem in members {
                push_problem(&mut out, problem, options, "  ");
            }
        }
    } else {
        for problem in &report.problems {
            push_problem(&mut out, problem, options, "");
        }
    }

    if let Some(r) = &report.truncated_reason {
        out.push_str(&format!("Note: {}\n", r));
    }

    out
}

fn push_problem(out: &mut String, p: &RenderableProblem, options: &RenderOptions, indent: &str) {
    out.push_str(&format!("{}- {}: {}\n", indent, p.trace, p.message));
    if let Some(doc) = &p.documentation {
        out.push_str(&format!("{}  See section {}\n", indent, doc.anchor));
    }
    if options.show_failures {
        for failure in &p.failures {
            for line in failure.lines() {
                out.push_str(&format!("{}    {}\n", indent, line));
            }
        }
    }
}
