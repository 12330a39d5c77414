use thiserror::Error;

/// A provenance frame could not be constructed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("{variant} frame requires a non-empty {field}")]
    MissingField {
        variant: &'static str,
        field: &'static str,
    },
}

/// A wire problem could not be converted into a domain problem.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error("message has no fragments")]
    EmptyMessage,

    #[error("exception requires a non-empty message or type")]
    EmptyFailure,
}

/// A whole problem set was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProblemSetError {
    #[error("unsupported schema `{found}` (expected `{expected}`)")]
    UnsupportedSchema {
        found: String,
        expected: &'static str,
    },

    #[error("problem #{index}: {source}")]
    Problem {
        index: usize,
        #[source]
        source: ConvertError,
    },
}
