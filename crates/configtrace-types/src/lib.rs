//! Stable vocabulary shared across the configtrace workspace.
//!
//! This crate is intentionally boring:
//! - property kind labels used by provenance frames
//! - the documentation section catalog
//! - stable schema identifiers
//! - wire DTOs for problem sets exchanged as JSON

#![forbid(unsafe_code)]

pub mod docs;
pub mod ids;
pub mod kind;
pub mod wire;

pub use docs::{DocumentationSection, all_section_ids, lookup_section};
pub use kind::PropertyKind;
pub use wire::{
    FailureV1, FragmentV1, ProblemSetV1, ProblemV1, SCHEMA_PROBLEMS_V1, StackFrameV1,
    StackTraceV1, TraceV1,
};
