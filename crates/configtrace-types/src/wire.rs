//! JSON wire format for problem sets.
//!
//! These DTOs carry no validation; the domain crate converts them into checked values.

use crate::{DocumentationSection, PropertyKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for problem sets.
pub const SCHEMA_PROBLEMS_V1: &str = "configtrace.problems.v1";

/// One provenance frame, with its tail nested inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceV1 {
    Unknown,
    Gradle,
    BuildLogic {
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
    },
    BuildLogicClass {
        name: String,
    },
    Task {
        #[serde(rename = "type")]
        type_name: String,
        path: String,
    },
    Bean {
        #[serde(rename = "type")]
        type_name: String,
        tail: Box<TraceV1>,
    },
    Property {
        property_kind: PropertyKind,
        name: String,
        tail: Box<TraceV1>,
    },
    Project {
        path: String,
        tail: Box<TraceV1>,
    },
    SystemProperty {
        name: String,
        tail: Box<TraceV1>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FragmentV1 {
    Text(String),
    Reference(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FailureV1 {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<FailureV1>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StackFrameV1 {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StackTraceV1 {
    pub summary: String,
    #[serde(default)]
    pub frames: Vec<StackFrameV1>,
    /// Set when no real exception existed and the trace was made up for display.
    #[serde(default)]
    pub synthesized: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProblemV1 {
    pub trace: TraceV1,
    pub message: Vec<FragmentV1>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<FailureV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<StackTraceV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<DocumentationSection>,

    /// Stable identity hash. Output only; ignored on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProblemSetV1 {
    pub schema: String,
    #[serde(default)]
    pub problems: Vec<ProblemV1>,
}

impl ProblemSetV1 {
    pub fn new(problems: Vec<ProblemV1>) -> Self {
        Self {
            schema: SCHEMA_PROBLEMS_V1.to_string(),
            problems,
        }
    }
}
