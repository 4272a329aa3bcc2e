//! The set of known grammars, and resolution of untyped input against it.

use std::sync::LazyLock;

use tracing::debug;

use crate::{types, Captures, Grammar, IdError, Matching, RegistryError};

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| Registry {
    grammars: types::BUILTIN.to_vec(),
});

/// An input resolved to exactly one identifier kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identified {
    pub grammar: &'static Grammar,
    pub captures: Captures,
}

impl Identified {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.grammar.kind()
    }

    /// The canonical path for the resolved identifier.
    #[must_use]
    pub fn id(&self) -> String {
        self.grammar.format_captures(&self.captures)
    }

    /// Human-readable description of the resolved identifier.
    #[must_use]
    pub fn describe(&self) -> String {
        self.grammar.describe_captures(&self.captures)
    }
}

/// A read-only table of grammars, one per identifier kind.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    grammars: Vec<&'static Grammar>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of every built-in kind, initialized on first use.
    #[must_use]
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Adds a grammar, rejecting a kind name that is already registered.
    pub fn register(&mut self, grammar: &'static Grammar) -> Result<(), RegistryError> {
        if self.grammars.iter().any(|g| g.kind() == grammar.kind()) {
            return Err(RegistryError::DuplicateKind(grammar.kind()));
        }
        self.grammars.push(grammar);
        Ok(())
    }

    /// Looks a grammar up by kind, exactly first and then ignoring case.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&'static Grammar> {
        self.grammars
            .iter()
            .find(|g| g.kind() == kind)
            .or_else(|| self.grammars.iter().find(|g| g.kind().eq_ignore_ascii_case(kind)))
            .copied()
    }

    /// Registered grammars in registration order.
    pub fn grammars(&self) -> impl Iterator<Item = &'static Grammar> + '_ {
        self.grammars.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }

    /// Resolves `input` to the one kind whose grammar strictly accepts it.
    pub fn identify(&self, input: &str) -> Result<Identified, IdError> {
        self.resolve(input, Matching::Strict)
    }

    /// Resolves `input` ignoring the casing of literal segments.
    ///
    /// When several grammars accept the input case-insensitively the result is
    /// [`IdError::Ambiguous`]; the registry never picks one.
    pub fn identify_insensitively(&self, input: &str) -> Result<Identified, IdError> {
        self.resolve(input, Matching::Insensitive)
    }

    /// Rewrites `input` into the canonical casing of the one kind it matches.
    pub fn normalize(&self, input: &str) -> Result<String, IdError> {
        self.identify_insensitively(input).map(|found| found.id())
    }

    /// Resolves `input` with the given matching mode.
    pub fn resolve(&self, input: &str, matching: Matching) -> Result<Identified, IdError> {
        if input.is_empty() {
            return Err(IdError::EmptyInput);
        }

        let mut matches: Vec<Identified> = self
            .grammars
            .iter()
            .copied()
            .filter_map(|grammar| {
                grammar
                    .parse(input, matching)
                    .ok()
                    .map(|captures| Identified { grammar, captures })
            })
            .collect();

        match matches.len() {
            0 => {
                debug!(input, ?matching, "no grammar accepted identifier");
                Err(IdError::Unrecognized(input.to_string()))
            }
            1 => {
                let found = matches.remove(0);
                debug!(input, kind = found.kind(), ?matching, "identified resource kind");
                Ok(found)
            }
            _ => {
                let candidates: Vec<&'static str> = matches.iter().map(Identified::kind).collect();
                debug!(input, ?candidates, ?matching, "identifier matches several kinds");
                Err(IdError::Ambiguous(candidates))
            }
        }
    }
}
