//! Conversion between wire DTOs and domain values.
//!
//! Incoming DTOs go through the same validating constructors as hand-built values, so a
//! problem read from JSON is indistinguishable from one built in code.

use crate::error::{ConvertError, ProblemSetError, TraceError};
use crate::failure::{Failure, StackFrame, StackTracingFailure};
use crate::identity::TypeIdentity;
use crate::message::{Fragment, StructuredMessage, StructuredMessageBuilder};
use crate::problem::PropertyProblem;
use crate::trace::PropertyTrace;
use configtrace_types::{
    FailureV1, FragmentV1, ProblemSetV1, ProblemV1, SCHEMA_PROBLEMS_V1, StackFrameV1,
    StackTraceV1, TraceV1,
};

/// Convert every problem in a set, failing on the first invalid entry.
pub fn problems_from_set(set: &ProblemSetV1) -> Result<Vec<PropertyProblem>, ProblemSetError> {
    if set.schema != SCHEMA_PROBLEMS_V1 {
        return Err(ProblemSetError::UnsupportedSchema {
            found: set.schema.clone(),
            expected: SCHEMA_PROBLEMS_V1,
        });
    }

    set.problems
        .iter()
        .enumerate()
        .map(|(index, dto)| {
            PropertyProblem::try_from(dto)
                .map_err(|source| ProblemSetError::Problem { index, source })
        })
        .collect()
}

impl TryFrom<&TraceV1> for PropertyTrace {
    type Error = TraceError;

    fn try_from(value: &TraceV1) -> Result<Self, Self::Error> {
        match value {
            TraceV1::Unknown => Ok(PropertyTrace::unknown()),
            TraceV1::Gradle => Ok(PropertyTrace::gradle()),
            TraceV1::BuildLogic { source, line } => {
                PropertyTrace::build_logic(source.as_str(), *line)
            }
            TraceV1::BuildLogicClass { name } => PropertyTrace::build_logic_class(name.as_str()),
            TraceV1::Task { type_name, path } => {
                PropertyTrace::task(type_name.as_str(), path.as_str())
            }
            TraceV1::Bean { type_name, tail } => {
                PropertyTrace::bean(type_name.as_str(), PropertyTrace::try_from(&**tail)?)
            }
            TraceV1::Property {
                property_kind,
                name,
                tail,
            } => PropertyTrace::property(
                *property_kind,
                name.as_str(),
                PropertyTrace::try_from(&**tail)?,
            ),
            TraceV1::Project { path, tail } => {
                PropertyTrace::project(path.as_str(), PropertyTrace::try_from(&**tail)?)
            }
            TraceV1::SystemProperty { name, tail } => PropertyTrace::system_property(
                name.as_str(),
                PropertyTrace::try_from(&**tail)?,
            ),
        }
    }
}

impl From<&PropertyTrace> for TraceV1 {
    fn from(value: &PropertyTrace) -> Self {
        match value {
            PropertyTrace::Unknown => TraceV1::Unknown,
            PropertyTrace::Gradle => TraceV1::Gradle,
            PropertyTrace::BuildLogic(t) => TraceV1::BuildLogic {
                source: t.source().to_string(),
                line: t.line(),
            },
            PropertyTrace::BuildLogicClass(t) => TraceV1::BuildLogicClass {
                name: t.name().to_string(),
            },
            PropertyTrace::Task(t) => TraceV1::Task {
                type_name: t.type_name().name().to_string(),
                path: t.path().to_string(),
            },
            PropertyTrace::Bean(t) => TraceV1::Bean {
                type_name: t.type_name().name().to_string(),
                tail: Box::new(TraceV1::from(t.tail())),
            },
            PropertyTrace::Property(t) => TraceV1::Property {
                property_kind: t.kind(),
                name: t.name().to_string(),
                tail: Box::new(TraceV1::from(t.tail())),
            },
            PropertyTrace::Project(t) => TraceV1::Project {
                path: t.path().to_string(),
                tail: Box::new(TraceV1::from(t.tail())),
            },
            PropertyTrace::SystemProperty(t) => TraceV1::SystemProperty {
                name: t.name().to_string(),
                tail: Box::new(TraceV1::from(t.tail())),
            },
        }
    }
}

fn message_from_fragments(fragments: &[FragmentV1]) -> Result<StructuredMessage, ConvertError> {
    if fragments.is_empty() {
        return Err(ConvertError::EmptyMessage);
    }
    let mut builder = StructuredMessageBuilder::default();
    for fragment in fragments {
        match fragment {
            FragmentV1::Text(text) => builder.text(text.as_str()),
            FragmentV1::Reference(name) => builder.reference(name.as_str()),
        };
    }
    Ok(builder.build())
}

fn fragments_from_message(message: &StructuredMessage) -> Vec<FragmentV1> {
    message
        .fragments()
        .iter()
        .map(|fragment| match fragment {
            Fragment::Text(text) => FragmentV1::Text(text.clone()),
            Fragment::Reference(name) => FragmentV1::Reference(name.clone()),
        })
        .collect()
}

impl TryFrom<&FailureV1> for Failure {
    type Error = ConvertError;

    fn try_from(value: &FailureV1) -> Result<Self, Self::Error> {
        let message = value.message.clone().unwrap_or_default();
        let type_name = Some(value.type_name.as_str())
            .filter(|name| !name.trim().is_empty())
            .map(TypeIdentity::new);
        if type_name.is_none() && message.trim().is_empty() {
            return Err(ConvertError::EmptyFailure);
        }
        let failure = Failure::new(type_name, message);
        match &value.cause {
            Some(cause) => Ok(failure.with_cause(Failure::try_from(&**cause)?)),
            None => Ok(failure),
        }
    }
}

impl From<&Failure> for FailureV1 {
    fn from(value: &Failure) -> Self {
        FailureV1 {
            type_name: value
                .type_name()
                .map(|t| t.name().to_string())
                .unwrap_or_default(),
            message: Some(value.message().to_string()).filter(|m| !m.is_empty()),
            cause: value.cause().map(|c| Box::new(FailureV1::from(c))),
        }
    }
}

impl From<&StackFrameV1> for StackFrame {
    fn from(value: &StackFrameV1) -> Self {
        StackFrame {
            symbol: value.symbol.clone(),
            file: value.file.clone(),
            line: value.line,
        }
    }
}

impl From<&StackTraceV1> for StackTracingFailure {
    fn from(value: &StackTraceV1) -> Self {
        let frames = value.frames.iter().map(StackFrame::from).collect();
        if value.synthesized {
            StackTracingFailure::synthesized(value.summary.as_str()).with_frames(frames)
        } else {
            StackTracingFailure::from_failure(&Failure::new(None, value.summary.as_str()), frames)
        }
    }
}

impl From<&StackTracingFailure> for StackTraceV1 {
    fn from(value: &StackTracingFailure) -> Self {
        StackTraceV1 {
            summary: value.summary().to_string(),
            frames: value
                .frames()
                .iter()
                .map(|f| StackFrameV1 {
                    symbol: f.symbol.clone(),
                    file: f.file.clone(),
                    line: f.line,
                })
                .collect(),
            synthesized: value.is_synthesized(),
        }
    }
}

impl TryFrom<&ProblemV1> for PropertyProblem {
    type Error = ConvertError;

    fn try_from(value: &ProblemV1) -> Result<Self, Self::Error> {
        let trace = PropertyTrace::try_from(&value.trace)?;
        let message = message_from_fragments(&value.message)?;
        let mut problem = PropertyProblem::new(trace, message);
        if let Some(exception) = &value.exception {
            problem = problem.with_exception(Failure::try_from(exception)?);
        }
        if let Some(stack_trace) = &value.stack_trace {
            problem = problem.with_stack_tracing_failure(StackTracingFailure::from(stack_trace));
        }
        if let Some(section) = value.documentation {
            problem = problem.with_documentation_section(section);
        }
        Ok(problem)
    }
}

impl From<&PropertyProblem> for ProblemV1 {
    fn from(value: &PropertyProblem) -> Self {
        ProblemV1 {
            trace: TraceV1::from(value.trace()),
            message: fragments_from_message(value.message()),
            exception: value.exception().map(FailureV1::from),
            stack_trace: value.stack_tracing_failure().map(StackTraceV1::from),
            documentation: value.documentation_section(),
            fingerprint: Some(value.fingerprint()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::problem;
    use configtrace_types::{DocumentationSection, PropertyKind};

    fn task_dto() -> TraceV1 {
        TraceV1::Task {
            type_name: "org.example.Compile".to_string(),
            path: ":app:compile".to_string(),
        }
    }

    fn problem_dto(trace: TraceV1) -> ProblemV1 {
        ProblemV1 {
            trace,
            message: vec![
                FragmentV1::Text("invocation of ".to_string()),
                FragmentV1::Reference("Task.project".to_string()),
            ],
            exception: None,
            stack_trace: None,
            documentation: Some(DocumentationSection::RequirementsUseProjectDuringExecution),
            fingerprint: None,
        }
    }

    #[test]
    fn converts_nested_trace() {
        let dto = TraceV1::Property {
            property_kind: PropertyKind::OutputProperty,
            name: "destination".to_string(),
            tail: Box::new(TraceV1::Bean {
                type_name: "org.example.Options".to_string(),
                tail: Box::new(task_dto()),
            }),
        };
        let trace = PropertyTrace::try_from(&dto).unwrap();
        assert_eq!(
            trace.render(),
            "output property `destination` of `org.example.Options` bean found in task `:app:compile` of type `org.example.Compile`"
        );
        assert_eq!(TraceV1::from(&trace), dto);
    }

    #[test]
    fn blank_nested_field_is_rejected() {
        let dto = TraceV1::Project {
            path: ":app".to_string(),
            tail: Box::new(TraceV1::BuildLogic {
                source: String::new(),
                line: Some(1),
            }),
        };
        assert_eq!(
            PropertyTrace::try_from(&dto),
            Err(TraceError::MissingField {
                variant: "build logic",
                field: "source"
            })
        );
    }

    #[test]
    fn converts_problem_with_payloads() {
        let mut dto = problem_dto(task_dto());
        dto.exception = Some(FailureV1 {
            type_name: "java.io.IOException".to_string(),
            message: Some("read failed".to_string()),
            cause: Some(Box::new(FailureV1 {
                type_name: String::new(),
                message: Some("disk full".to_string()),
                cause: None,
            })),
        });
        dto.stack_trace = Some(StackTraceV1 {
            summary: "reported here".to_string(),
            frames: vec![StackFrameV1 {
                symbol: "apply".to_string(),
                file: Some("build.gradle".to_string()),
                line: Some(4),
            }],
            synthesized: true,
        });

        let problem = PropertyProblem::try_from(&dto).unwrap();
        assert_eq!(problem.message().render(), "invocation of 'Task.project'");
        let exception = problem.exception().unwrap();
        assert_eq!(exception.to_string(), "java.io.IOException: read failed");
        assert_eq!(exception.cause().unwrap().message(), "disk full");
        assert!(problem.stack_tracing_failure().unwrap().is_synthesized());
        assert_eq!(
            problem.documentation_section(),
            Some(DocumentationSection::RequirementsUseProjectDuringExecution)
        );

        let back = ProblemV1::from(&problem);
        assert_eq!(back.exception, dto.exception);
        assert_eq!(back.stack_trace, dto.stack_trace);
        assert_eq!(back.fingerprint, Some(problem.fingerprint()));
    }

    #[test]
    fn empty_message_is_rejected() {
        let mut dto = problem_dto(task_dto());
        dto.message.clear();
        assert_eq!(
            PropertyProblem::try_from(&dto),
            Err(ConvertError::EmptyMessage)
        );
    }

    #[test]
    fn empty_failure_is_rejected() {
        let mut dto = problem_dto(task_dto());
        dto.exception = Some(FailureV1 {
            type_name: " ".to_string(),
            message: None,
            cause: None,
        });
        assert_eq!(
            PropertyProblem::try_from(&dto),
            Err(ConvertError::EmptyFailure)
        );
    }

    #[test]
    fn failure_type_keeps_surrounding_whitespace() {
        let dto = FailureV1 {
            type_name: " org.example.X ".to_string(),
            message: Some("m".to_string()),
            cause: None,
        };
        let failure = Failure::try_from(&dto).unwrap();
        assert_eq!(FailureV1::from(&failure), dto);
    }

    #[test]
    fn set_rejects_unknown_schema() {
        let set = ProblemSetV1 {
            schema: "configtrace.problems.v0".to_string(),
            problems: Vec::new(),
        };
        assert!(matches!(
            problems_from_set(&set),
            Err(ProblemSetError::UnsupportedSchema { .. })
        ));
    }

    #[test]
    fn set_reports_index_of_invalid_problem() {
        let mut bad = problem_dto(task_dto());
        bad.message.clear();
        let set = ProblemSetV1::new(vec![problem_dto(task_dto()), bad]);
        let err = problems_from_set(&set).unwrap_err();
        assert_eq!(
            err,
            ProblemSetError::Problem {
                index: 1,
                source: ConvertError::EmptyMessage
            }
        );
        assert_eq!(err.to_string(), "problem #1: message has no fragments");
    }

    #[test]
    fn exported_problem_converts_back_to_equal_value() {
        let original = problem("x");
        let dto = ProblemV1::from(&original);
        assert_eq!(PropertyProblem::try_from(&dto).unwrap(), original);
    }
}
