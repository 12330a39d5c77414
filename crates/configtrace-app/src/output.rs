//! Output helpers shared by the CLI: writing rendered text and the normalized problem set.

use anyhow::Context;
use camino::Utf8Path;
use configtrace_domain::PropertyProblem;
use configtrace_types::{ProblemSetV1, ProblemV1};
use tracing::debug;

/// Serialize problems as a pretty-printed `configtrace.problems.v1` document with fingerprints.
pub fn serialize_problems(problems: &[PropertyProblem]) -> anyhow::Result<Vec<u8>> {
    let set = ProblemSetV1::new(problems.iter().map(ProblemV1::from).collect());
    let mut data = serde_json::to_vec_pretty(&set).context("serialize problem set")?;
    data.push(b'\n');
    Ok(data)
}

/// Write `data` to `path`, creating parent directories as needed.
pub fn write_output(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    debug!(%path, bytes = data.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_problem_set;
    use camino::Utf8PathBuf;
    use configtrace_domain::{PropertyTrace, StructuredMessage};

    fn sample() -> PropertyProblem {
        let trace = PropertyTrace::system_property(
            "http.proxyHost",
            PropertyTrace::build_logic("build file 'build.gradle'", Some(7)).unwrap(),
        )
        .unwrap();
        PropertyProblem::new(trace, StructuredMessage::for_text("read at configuration time"))
    }

    #[test]
    fn serialized_problems_parse_back() {
        let problem = sample();
        let data = serialize_problems(std::slice::from_ref(&problem)).unwrap();
        let text = String::from_utf8(data).unwrap();
        assert!(text.contains("\"schema\": \"configtrace.problems.v1\""));
        assert!(text.contains(&format!("\"fingerprint\": \"{}\"", problem.fingerprint())));

        let parsed = parse_problem_set(&text).unwrap();
        assert_eq!(parsed, vec![problem]);
    }

    #[test]
    fn write_output_creates_parent_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        let path = root.join("out").join("nested").join("report.md");

        write_output(&path, b"# report\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report\n");
    }
}
