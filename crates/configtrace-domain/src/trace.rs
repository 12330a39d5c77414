//! Provenance chains.
//!
//! A [`PropertyTrace`] describes where a problem was found, from the most specific frame
//! (a property) out to the build logic or task that owns it. Wrapping frames hold their
//! tail behind an [`Arc`], so chains are immutable and can be shared across problems.

use crate::error::TraceError;
use crate::identity::TypeIdentity;
use configtrace_types::PropertyKind;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

const QUOTE: char = '`';

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyTrace {
    Unknown,
    Gradle,
    BuildLogic(BuildLogicTrace),
    BuildLogicClass(BuildLogicClassTrace),
    Task(TaskTrace),
    Bean(BeanTrace),
    Property(PropertyFieldTrace),
    Project(ProjectTrace),
    SystemProperty(SystemPropertyTrace),
}

/// A build script or plugin source, optionally pinned to a line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BuildLogicTrace {
    source: String,
    line: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BuildLogicClassTrace {
    name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskTrace {
    type_name: TypeIdentity,
    path: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BeanTrace {
    type_name: TypeIdentity,
    tail: Arc<PropertyTrace>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyFieldTrace {
    kind: PropertyKind,
    name: String,
    tail: Arc<PropertyTrace>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProjectTrace {
    path: String,
    tail: Arc<PropertyTrace>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SystemPropertyTrace {
    name: String,
    tail: Arc<PropertyTrace>,
}

fn required(
    value: impl Into<String>,
    variant: &'static str,
    field: &'static str,
) -> Result<String, TraceError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(TraceError::MissingField { variant, field });
    }
    Ok(value)
}

fn required_type(
    value: impl Into<TypeIdentity>,
    variant: &'static str,
) -> Result<TypeIdentity, TraceError> {
    let value = value.into();
    if value.is_blank() {
        return Err(TraceError::MissingField {
            variant,
            field: "type",
        });
    }
    Ok(value)
}

impl PropertyTrace {
    pub fn unknown() -> Self {
        PropertyTrace::Unknown
    }

    pub fn gradle() -> Self {
        PropertyTrace::Gradle
    }

    pub fn build_logic(
        source: impl Into<String>,
        line: Option<u32>,
    ) -> Result<Self, TraceError> {
        Ok(PropertyTrace::BuildLogic(BuildLogicTrace {
            source: required(source, "build logic", "source")?,
            line,
        }))
    }

    pub fn build_logic_class(name: impl Into<String>) -> Result<Self, TraceError> {
        Ok(PropertyTrace::BuildLogicClass(BuildLogicClassTrace {
            name: required(name, "build logic class", "name")?,
        }))
    }

    pub fn task(
        type_name: impl Into<TypeIdentity>,
        path: impl Into<String>,
    ) -> Result<Self, TraceError> {
        Ok(PropertyTrace::Task(TaskTrace {
            type_name: required_type(type_name, "task")?,
            path: required(path, "task", "path")?,
        }))
    }

    pub fn bean(
        type_name: impl Into<TypeIdentity>,
        tail: impl Into<Arc<PropertyTrace>>,
    ) -> Result<Self, TraceError> {
        Ok(PropertyTrace::Bean(BeanTrace {
            type_name: required_type(type_name, "bean")?,
            tail: tail.into(),
        }))
    }

    pub fn property(
        kind: PropertyKind,
        name: impl Into<String>,
        tail: impl Into<Arc<PropertyTrace>>,
    ) -> Result<Self, TraceError> {
        Ok(PropertyTrace::Property(PropertyFieldTrace {
            kind,
            name: required(name, "property", "name")?,
            tail: tail.into(),
        }))
    }

    pub fn project(
        path: impl Into<String>,
        tail: impl Into<Arc<PropertyTrace>>,
    ) -> Result<Self, TraceError> {
        Ok(PropertyTrace::Project(ProjectTrace {
            path: required(path, "project", "path")?,
            tail: tail.into(),
        }))
    }

    pub fn system_property(
        name: impl Into<String>,
        tail: impl Into<Arc<PropertyTrace>>,
    ) -> Result<Self, TraceError> {
        Ok(PropertyTrace::SystemProperty(SystemPropertyTrace {
            name: required(name, "system property", "name")?,
            tail: tail.into(),
        }))
    }

    /// The next, more general frame. `None` for terminal frames.
    pub fn tail(&self) -> Option<&PropertyTrace> {
        self.tail_arc().map(Arc::as_ref)
    }

    /// The shared handle to the tail, for building sibling chains without copying.
    pub fn tail_arc(&self) -> Option<&Arc<PropertyTrace>> {
        match self {
            PropertyTrace::Bean(t) => Some(&t.tail),
            PropertyTrace::Property(t) => Some(&t.tail),
            PropertyTrace::Project(t) => Some(&t.tail),
            PropertyTrace::SystemProperty(t) => Some(&t.tail),
            PropertyTrace::Unknown
            | PropertyTrace::Gradle
            | PropertyTrace::BuildLogic(_)
            | PropertyTrace::BuildLogicClass(_)
            | PropertyTrace::Task(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.tail().is_none()
    }

    /// Frames from `self` out to the terminal frame.
    ///
    /// Each call starts a fresh walk; nothing is cached.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The terminal frame that ends this chain.
    pub fn root(&self) -> &PropertyTrace {
        let mut current = self;
        while let Some(tail) = current.tail() {
            current = tail;
        }
        current
    }

    /// Number of frames in the chain, including `self`.
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Render the whole chain as a sentence.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The plugin or script that owns this problem.
    ///
    /// Wrapping frames defer to their tail, so the answer is always the outermost build
    /// logic context. A terminal frame names itself.
    pub fn containing_user_code(&self) -> String {
        match self {
            PropertyTrace::Bean(t) => t.tail.containing_user_code(),
            PropertyTrace::Property(t) => t.tail.containing_user_code(),
            PropertyTrace::Project(t) => t.tail.containing_user_code(),
            PropertyTrace::SystemProperty(t) => t.tail.containing_user_code(),
            PropertyTrace::Unknown
            | PropertyTrace::Gradle
            | PropertyTrace::BuildLogic(_)
            | PropertyTrace::BuildLogicClass(_)
            | PropertyTrace::Task(_) => self.render(),
        }
    }

    /// Write this frame's own phrase, without its tail.
    fn write_phrase<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            PropertyTrace::Gradle => out.write_str("Gradle runtime"),
            PropertyTrace::Property(t) => {
                write!(out, "{} {QUOTE}{}{QUOTE} of ", t.kind.phrase(), t.name)
            }
            PropertyTrace::SystemProperty(t) => {
                write!(out, "system property {QUOTE}{}{QUOTE} set at ", t.name)
            }
            PropertyTrace::Bean(t) => {
                write!(out, "{QUOTE}{}{QUOTE} bean found in ", t.type_name)
            }
            PropertyTrace::Task(t) => write!(
                out,
                "task {QUOTE}{}{QUOTE} of type {QUOTE}{}{QUOTE}",
                t.path, t.type_name
            ),
            PropertyTrace::BuildLogic(t) => {
                out.write_str(&t.source)?;
                if let Some(line) = t.line {
                    write!(out, ": line {line}")?;
                }
                Ok(())
            }
            PropertyTrace::BuildLogicClass(t) => {
                write!(out, "class {QUOTE}{}{QUOTE}", t.name)
            }
            PropertyTrace::Unknown => out.write_str("unknown location"),
            PropertyTrace::Project(t) => {
                write!(out, "project {QUOTE}{}{QUOTE} in ", t.path)
            }
        }
    }
}

impl fmt::Display for PropertyTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in self.chain() {
            frame.write_phrase(f)?;
        }
        Ok(())
    }
}

impl BuildLogicTrace {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl BuildLogicClassTrace {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TaskTrace {
    pub fn type_name(&self) -> &TypeIdentity {
        &self.type_name
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl BeanTrace {
    pub fn type_name(&self) -> &TypeIdentity {
        &self.type_name
    }

    pub fn tail(&self) -> &PropertyTrace {
        &self.tail
    }
}

impl PropertyFieldTrace {
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tail(&self) -> &PropertyTrace {
        &self.tail
    }
}

impl ProjectTrace {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn tail(&self) -> &PropertyTrace {
        &self.tail
    }
}

impl SystemPropertyTrace {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tail(&self) -> &PropertyTrace {
        &self.tail
    }
}

/// Iterator over the frames of a chain, innermost first.
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<&'a PropertyTrace>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a PropertyTrace;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.tail();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
