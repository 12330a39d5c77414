//! Structured messages.
//!
//! A message is a frozen list of fragments. Reference fragments name an identifier (a type,
//! a property) and stay distinct from plain text so presentation layers can style them
//! without re-parsing the rendered string.

use crate::identity::TypeIdentity;
use std::fmt;

const REFERENCE_QUOTE: char = '\'';

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fragment {
    Text(String),
    Reference(String),
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Text(text) => f.write_str(text),
            Fragment::Reference(name) => {
                write!(f, "{REFERENCE_QUOTE}{name}{REFERENCE_QUOTE}")
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StructuredMessage {
    fragments: Vec<Fragment>,
}

impl StructuredMessage {
    /// A message made of a single text fragment.
    pub fn for_text(text: impl Into<String>) -> Self {
        Self {
            fragments: vec![Fragment::Text(text.into())],
        }
    }

    /// Fill a fresh builder and freeze the result.
    pub fn build(f: impl FnOnce(&mut StructuredMessageBuilder)) -> Self {
        let mut builder = StructuredMessageBuilder::default();
        f(&mut builder);
        builder.build()
    }

    pub fn builder() -> StructuredMessageBuilder {
        StructuredMessageBuilder::default()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StructuredMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}

/// Accumulates fragments for a single message.
///
/// Owned by one writer; `build` snapshots the fragments into an immutable
/// [`StructuredMessage`].
#[derive(Clone, Debug, Default)]
pub struct StructuredMessageBuilder {
    fragments: Vec<Fragment>,
}

impl StructuredMessageBuilder {
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.fragments.push(Fragment::Text(text.into()));
        self
    }

    pub fn reference(&mut self, name: impl Into<String>) -> &mut Self {
        self.fragments.push(Fragment::Reference(name.into()));
        self
    }

    /// Reference a type by its fully-qualified name.
    pub fn reference_type(&mut self, type_name: &TypeIdentity) -> &mut Self {
        self.reference(type_name.name())
    }

    pub fn reference_type_of<T: ?Sized>(&mut self) -> &mut Self {
        self.reference_type(&TypeIdentity::of::<T>())
    }

    /// Splice the fragments of another message, in order.
    pub fn message(&mut self, message: &StructuredMessage) -> &mut Self {
        self.fragments.extend(message.fragments.iter().cloned());
        self
    }

    pub fn build(&self) -> StructuredMessage {
        StructuredMessage {
            fragments: self.fragments.clone(),
        }
    }
}
