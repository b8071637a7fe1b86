//! Query errors

/// Why a lookup could not produce the expected element
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Exactly one element was required and none matched
    #[error("No elements matching options: {predicate}")]
    NoMatch { predicate: String },

    /// At most one element was allowed and more matched
    #[error("At least two elements match options: {predicate}\n1st match: {first}\n2nd match: {second}")]
    Ambiguous {
        predicate: String,
        first: String,
        second: String,
    },

    /// The element cannot perform the requested operation
    #[error("{operation}: {reason}")]
    Unsupported {
        operation: &'static str,
        reason: String,
    },
}

pub type Result<T, E = QueryError> = std::result::Result<T, E>;
