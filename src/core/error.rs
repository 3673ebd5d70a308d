use thiserror::Error;

/// Reason a document number was rejected.
///
/// The boolean predicates collapse every variant to `false`; the `check_*`
/// functions surface it for callers that want to explain the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// No value was supplied, or nothing significant remained after normalization.
    #[error("no value given")]
    Missing,

    /// The normalized value has the wrong number of characters.
    #[error("expected {expected} characters, found {found}")]
    Length {
        /// Required length after normalization.
        expected: usize,
        /// Actual length after normalization.
        found: usize,
    },

    /// The normalized value does not have the required shape.
    #[error("malformed: {0}")]
    Format(&'static str),

    /// The shape is right but an embedded control value does not match.
    #[error("control mismatch: expected '{expected}', found '{found}'")]
    Checksum {
        /// Control value recomputed from the other fields.
        expected: String,
        /// Control value present in the input.
        found: String,
    },

    /// A rule name did not match any known document type.
    #[error("unknown validation rule '{0}'")]
    UnknownRule(String),
}

impl DocumentError {
    /// Build a length error from the normalized candidate.
    pub fn length(expected: usize, candidate: &str) -> Self {
        Self::Length {
            expected,
            found: candidate.chars().count(),
        }
    }

    /// Build a checksum error from anything displayable.
    pub fn checksum(expected: impl ToString, found: impl ToString) -> Self {
        Self::Checksum {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
