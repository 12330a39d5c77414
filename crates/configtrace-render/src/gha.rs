use crate::RenderableReport;

/// Render problems as GitHub Actions workflow command annotations.
///
/// Format:
/// `::warning title={user code}::{trace}: {message}`
///
/// A truncated report ends with `::notice title=configtrace::{reason}`.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for p in &report.problems {
        let title = escape_property(&p.user_code);

        let mut message = format!("{}: {}", p.trace, p.message);
        if let Some(doc) = &p.documentation {
            message.push_str(&format!(" (see {})", doc.anchor));
        }

        out.push(format!("::warning title={}::{}", title, escape_data(&message)));
    }

    if let Some(reason) = &report.truncated_reason {
        out.push(format!("::notice title=configtrace::{}", escape_data(reason)));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
