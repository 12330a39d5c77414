//! Failure payloads attached to problems.
//!
//! These describe an error that the caller already handled. They are display data only:
//! nothing in this crate re-raises them.

use crate::identity::TypeIdentity;
use std::error::Error;
use std::fmt;

/// A captured error and its causes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Failure {
    type_name: Option<TypeIdentity>,
    message: String,
    cause: Option<Box<Failure>>,
}

impl Failure {
    pub fn new(type_name: Option<TypeIdentity>, message: impl Into<String>) -> Self {
        Self {
            type_name,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: Failure) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Capture an error and its `source()` chain.
    ///
    /// Only the outermost error has a known type; causes are recorded by message.
    pub fn from_error<E: Error + ?Sized>(err: &E) -> Self {
        let mut messages = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            messages.push(cause.to_string());
            source = cause.source();
        }

        let cause = messages
            .into_iter()
            .rev()
            .fold(None, |inner: Option<Box<Failure>>, message| {
                Some(Box::new(Failure {
                    type_name: None,
                    message,
                    cause: inner,
                }))
            });

        Self {
            type_name: Some(TypeIdentity::of::<E>()),
            message: err.to_string(),
            cause,
        }
    }

    pub fn type_name(&self) -> Option<&TypeIdentity> {
        self.type_name.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_deref()
    }

    /// This failure followed by each of its causes.
    pub fn causes(&self) -> impl Iterator<Item = &Failure> {
        std::iter::successors(Some(self), |f| f.cause())
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_name {
            Some(type_name) if self.message.is_empty() => write!(f, "{type_name}"),
            Some(type_name) => write!(f, "{type_name}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StackFrame {
    pub symbol: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl StackFrame {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            file: None,
            line: None,
        }
    }

    pub fn at(mut self, file: impl Into<String>, line: Option<u32>) -> Self {
        self.file = Some(file.into());
        self.line = line;
        self
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}", self.symbol)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "({file}:{line})"),
            (Some(file), None) => write!(f, "({file})"),
            (None, _) => Ok(()),
        }
    }
}

/// A failure with a stack trace, which may have been made up at the report site when the
/// problem was not caused by an exception.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StackTracingFailure {
    summary: String,
    frames: Vec<StackFrame>,
    synthesized: bool,
}

impl StackTracingFailure {
    pub fn from_failure(failure: &Failure, frames: Vec<StackFrame>) -> Self {
        Self {
            summary: failure.to_string(),
            frames,
            synthesized: false,
        }
    }

    pub fn synthesized(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            frames: Vec::new(),
            synthesized: true,
        }
    }

    pub fn with_frames(mut self, frames: Vec<StackFrame>) -> Self {
        self.frames = frames;
        self
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn is_synthesized(&self) -> bool {
        self.synthesized
    }

    /// Summary line followed by one indented line per frame.
    pub fn render(&self) -> String {
        let mut out = self.summary.clone();
        for frame in &self.frames {
            out.push_str("\n\t");
            out.push_str(&frame.to_string());
        }
        out
    }
}
