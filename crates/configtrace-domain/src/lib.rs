//! Pure provenance model (no IO).
//!
//! Input: frames, messages and failure payloads built by detection code elsewhere.
//! Output: immutable problem records that render to stable strings.

#![forbid(unsafe_code)]

pub mod convert;
pub mod error;
pub mod failure;
pub mod identity;
pub mod message;
pub mod problem;
pub mod trace;

mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use convert::problems_from_set;
pub use error::{ConvertError, ProblemSetError, TraceError};
pub use failure::{Failure, StackFrame, StackTracingFailure};
pub use fingerprint::fingerprint_for_problem;
pub use identity::TypeIdentity;
pub use message::{Fragment, StructuredMessage, StructuredMessageBuilder};
pub use problem::PropertyProblem;
pub use trace::{Chain, PropertyTrace};
