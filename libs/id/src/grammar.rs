//! Segment grammars: the declarative shape of one identifier kind.

use crate::GrammarError;

/// One `/`-delimited position in an identifier path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A fixed keyword such as `resourceGroups`. Contributes no data.
    Literal(&'static str),
    /// A value bound to the named field, such as `Name`.
    Capture(&'static str),
}

impl Segment {
    /// The literal label or the capture's field name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Segment::Literal(label) | Segment::Capture(label) => label,
        }
    }

    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Segment::Capture(_))
    }
}

/// The ordered segment list for one identifier kind.
///
/// A grammar is immutable and fully determines how its kind is parsed and
/// formatted. Construction validates the shape:
///
/// - at least one segment, the last of which is a capture;
/// - literals are non-empty and contain no `/`;
/// - every capture is named, unique, and directly preceded by a literal key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grammar {
    kind: &'static str,
    segments: &'static [Segment],
}

impl Grammar {
    /// Builds a grammar, panicking if it is malformed.
    ///
    /// Intended for constant contexts, where the panic becomes a compile error:
    ///
    /// ```
    /// use armid::{Grammar, Segment};
    ///
    /// const WIDGET: Grammar = Grammar::new(
    ///     "Widget",
    ///     &[Segment::Literal("widgets"), Segment::Capture("Name")],
    /// );
    /// assert_eq!(WIDGET.capture_count(), 1);
    /// ```
    #[must_use]
    pub const fn new(kind: &'static str, segments: &'static [Segment]) -> Self {
        match Self::try_new(kind, segments) {
            Ok(grammar) => grammar,
            Err(err) => panic!("{}", err.as_str()),
        }
    }

    /// Builds a grammar, returning an error if it is malformed.
    pub const fn try_new(
        kind: &'static str,
        segments: &'static [Segment],
    ) -> Result<Self, GrammarError> {
        if segments.is_empty() {
            return Err(GrammarError::NoSegments);
        }

        let mut i = 0;
        while i < segments.len() {
            match segments[i] {
                Segment::Literal(label) => {
                    if label.is_empty() || contains_slash(label) {
                        return Err(GrammarError::InvalidLiteral);
                    }
                }
                Segment::Capture(field) => {
                    if field.is_empty() {
                        return Err(GrammarError::UnnamedCapture);
                    }
                    if i == 0 || segments[i - 1].is_capture() {
                        return Err(GrammarError::AdjacentCaptures);
                    }
                    let mut j = 0;
                    while j < i {
                        if let Segment::Capture(earlier) = segments[j] {
                            if str_eq(earlier, field) {
                                return Err(GrammarError::DuplicateCapture);
                            }
                        }
                        j += 1;
                    }
                }
            }
            i += 1;
        }

        if !segments[segments.len() - 1].is_capture() {
            return Err(GrammarError::TrailingLiteral);
        }

        Ok(Self { kind, segments })
    }

    /// The kind name, e.g. `Vault`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    #[must_use]
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Number of capture segments, i.e. fields of the typed identifier.
    #[must_use]
    pub const fn capture_count(&self) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < self.segments.len() {
            if self.segments[i].is_capture() {
                count += 1;
            }
            i += 1;
        }
        count
    }

    /// Capture field names in path order.
    pub fn capture_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Capture(field) => Some(*field),
            Segment::Literal(_) => None,
        })
    }

    /// Renders the grammar as a path template, captures shown as `{Field}`.
    ///
    /// ```
    /// # use armid::{Grammar, Segment};
    /// const G: Grammar = Grammar::new("Widget", &[Segment::Literal("widgets"), Segment::Capture("Name")]);
    /// assert_eq!(G.template(), "/widgets/{Name}");
    /// ```
    #[must_use]
    pub fn template(&self) -> String {
        let mut out = String::new();
        for segment in self.segments {
            out.push('/');
            match segment {
                Segment::Literal(label) => out.push_str(label),
                Segment::Capture(field) => {
                    out.push('{');
                    out.push_str(field);
                    out.push('}');
                }
            }
        }
        out
    }
}

const fn contains_slash(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'/' {
            return true;
        }
        i += 1;
    }
    false
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
