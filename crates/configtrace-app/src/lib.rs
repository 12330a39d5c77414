//! Use case orchestration for configtrace.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod output;
mod report;

pub use explain::{
    ExplainOutput, format_explanation, format_not_found, format_sections, run_explain,
};
pub use output::{serialize_problems, write_output};
pub use report::{
    ReportInput, ReportOutput, dedupe_problems, parse_problem_set, run_report, to_renderable,
    truncate_problems,
};
