//! Error types for identifier parsing, grammar construction, and registries.

use thiserror::Error;

/// Errors that can occur when parsing a resource identifier.
///
/// Every variant names the segment it concerns so that a failure can be traced
/// back to one position in the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    EmptyInput,

    /// A literal or capture segment was absent entirely.
    #[error("ID was missing the '{0}' element")]
    MissingSegment(&'static str),

    /// A capture segment was present but empty.
    #[error("ID was missing a value for the '{0}' element")]
    EmptySegmentValue(&'static str),

    /// A literal segment did not match byte-for-byte (strict parsing only).
    #[error("expected the '{expected}' element, got '{actual}'")]
    LiteralMismatch {
        expected: &'static str,
        actual: String,
    },

    /// The ID had segments left over once the grammar was exhausted.
    #[error("ID has unexpected trailing segments: '{0}'")]
    TrailingSegments(String),

    /// More than one identifier kind accepted the input.
    #[error("ID is ambiguous, it matches {}", .0.join(", "))]
    Ambiguous(Vec<&'static str>),

    /// No registered identifier kind accepted the input.
    #[error("ID '{0}' does not match any known resource kind")]
    Unrecognized(String),

    /// A data-plane identifier was not a valid absolute URL.
    #[error("invalid ID URL: {0}")]
    InvalidUrl(String),
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::EmptyInput)
    }

    /// Returns true if the input had the wrong number of segments.
    pub fn is_segment_count_error(&self) -> bool {
        matches!(
            self,
            IdError::MissingSegment(_) | IdError::TrailingSegments(_)
        )
    }

    /// Returns true if the error came from resolving a kind in a registry.
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, IdError::Ambiguous(_) | IdError::Unrecognized(_))
    }
}

/// Errors raised when a grammar is malformed.
///
/// These are programming errors. Grammars declared through
/// [`define_resource_id!`](crate::define_resource_id) surface them at compile
/// time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GrammarError {
    #[error("grammar has no segments")]
    NoSegments,

    #[error("literal segments must be non-empty and contain no '/'")]
    InvalidLiteral,

    #[error("capture segments must have a field name")]
    UnnamedCapture,

    #[error("capture segments must follow a literal key")]
    AdjacentCaptures,

    #[error("grammar must end with a capture segment")]
    TrailingLiteral,

    #[error("capture field names must be unique")]
    DuplicateCapture,
}

impl GrammarError {
    /// Static description, usable from constant evaluation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            GrammarError::NoSegments => "grammar has no segments",
            GrammarError::InvalidLiteral => {
                "literal segments must be non-empty and contain no '/'"
            }
            GrammarError::UnnamedCapture => "capture segments must have a field name",
            GrammarError::AdjacentCaptures => "capture segments must follow a literal key",
            GrammarError::TrailingLiteral => "grammar must end with a capture segment",
            GrammarError::DuplicateCapture => "capture field names must be unique",
        }
    }
}

/// Errors raised when assembling a registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("resource kind '{0}' is already registered")]
    DuplicateKind(&'static str),
}
