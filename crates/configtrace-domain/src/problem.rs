use crate::failure::{Failure, StackTracingFailure};
use crate::fingerprint::fingerprint_for_problem;
use crate::message::StructuredMessage;
use crate::trace::PropertyTrace;
use configtrace_types::DocumentationSection;
use std::sync::Arc;

/// A configuration problem: where it happened, what happened, and optional detail.
///
/// Equality covers every field, so the same problem reported from two traversals of the
/// same configuration code compares equal and can be deduplicated by callers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyProblem {
    trace: Arc<PropertyTrace>,
    message: StructuredMessage,
    exception: Option<Failure>,
    stack_tracing_failure: Option<StackTracingFailure>,
    documentation_section: Option<DocumentationSection>,
}

impl PropertyProblem {
    pub fn new(trace: impl Into<Arc<PropertyTrace>>, message: StructuredMessage) -> Self {
        Self {
            trace: trace.into(),
            message,
            exception: None,
            stack_tracing_failure: None,
            documentation_section: None,
        }
    }

    pub fn with_exception(mut self, exception: Failure) -> Self {
        self.exception = Some(exception);
        self
    }

    pub fn with_stack_tracing_failure(mut self, failure: StackTracingFailure) -> Self {
        self.stack_tracing_failure = Some(failure);
        self
    }

    pub fn with_documentation_section(mut self, section: DocumentationSection) -> Self {
        self.documentation_section = Some(section);
        self
    }

    pub fn trace(&self) -> &PropertyTrace {
        &self.trace
    }

    pub fn shared_trace(&self) -> &Arc<PropertyTrace> {
        &self.trace
    }

    pub fn message(&self) -> &StructuredMessage {
        &self.message
    }

    pub fn exception(&self) -> Option<&Failure> {
        self.exception.as_ref()
    }

    pub fn stack_tracing_failure(&self) -> Option<&StackTracingFailure> {
        self.stack_tracing_failure.as_ref()
    }

    pub fn documentation_section(&self) -> Option<DocumentationSection> {
        self.documentation_section
    }

    /// The plugin or script that owns this problem.
    pub fn user_code(&self) -> String {
        self.trace.containing_user_code()
    }

    pub fn fingerprint(&self) -> String {
        fingerprint_for_problem(
            &self.trace.render(),
            &self.message.render(),
            self.documentation_section.map(DocumentationSection::anchor),
        )
    }
}
