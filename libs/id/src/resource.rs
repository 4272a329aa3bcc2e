//! The trait every typed identifier implements.

use crate::{Captures, Grammar, IdError};

/// A typed identifier backed by a [`Grammar`].
///
/// Implementations are generated by
/// [`define_resource_id!`](crate::define_resource_id); the provided methods
/// are the generic parse/format engine shared by every kind.
pub trait ResourceId: Sized {
    /// The grammar for this kind.
    const GRAMMAR: &'static Grammar;

    /// Builds the identifier from a complete set of captures.
    fn from_captures(captures: Captures) -> Self;

    /// Field values in grammar order, exactly one per capture.
    fn segment_values(&self) -> Vec<&str>;

    /// Parses a canonical identifier, requiring exact-case literals.
    fn parse(input: &str) -> Result<Self, IdError> {
        Self::GRAMMAR.parse_strict(input).map(Self::from_captures)
    }

    /// Parses an identifier whose literal segments may be cased differently.
    ///
    /// This rewrites to a consistent casing and should only be used for that;
    /// use [`ResourceId::parse`] for validation.
    fn parse_insensitively(input: &str) -> Result<Self, IdError> {
        Self::GRAMMAR
            .parse_insensitively(input)
            .map(Self::from_captures)
    }

    /// The canonical path.
    fn id(&self) -> String {
        Self::GRAMMAR.format(&self.segment_values())
    }

    /// Human-readable description, e.g. `Vault: (Name "v1" / Resource Group "rg1")`.
    fn describe(&self) -> String {
        Self::GRAMMAR.describe(&self.segment_values())
    }
}
