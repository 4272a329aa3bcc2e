//! The lockstep walk shared by strict and insensitive parsing.
//!
//! Input is split on `/`, one leading and one trailing empty segment are
//! dropped, and the remaining segments are matched one-to-one against the
//! grammar. Every failure names the element at fault.

use tracing::trace;

use crate::{Grammar, IdError, Segment};

/// How literal segments are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Matching {
    /// Byte-for-byte. The only mode suitable for validation.
    #[default]
    Strict,
    /// ASCII case-insensitive, recording the grammar's canonical label.
    ///
    /// This is a lossy normalization: the input's casing of literal segments
    /// is discarded. Use it to rewrite identifiers that come back from
    /// external systems with inconsistent casing, never to validate them.
    Insensitive,
}

/// Captured field values of one parse, in grammar order.
///
/// A `Captures` only exists fully populated: every capture of the grammar that
/// produced it is bound to a non-empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Captures {
    fields: Vec<(&'static str, String)>,
}

impl Captures {
    /// Value bound to `field`, if the grammar has such a capture.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }

    /// `(field, value)` pairs in grammar order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Values in grammar order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Moves the values into a fixed-size array, in grammar order.
    ///
    /// Typed identifiers destructure exactly one value per capture.
    ///
    /// # Panics
    ///
    /// Panics if `N` differs from the number of captured values.
    #[must_use]
    pub fn into_values<const N: usize>(self) -> [String; N] {
        let count = self.fields.len();
        let values: Vec<String> = self.fields.into_iter().map(|(_, value)| value).collect();
        values
            .try_into()
            .unwrap_or_else(|_| panic!("expected {N} captured values, got {count}"))
    }
}

impl Grammar {
    /// Parses `input` requiring exact-case literals.
    pub fn parse_strict(&self, input: &str) -> Result<Captures, IdError> {
        self.parse(input, Matching::Strict)
    }

    /// Parses `input` matching literals case-insensitively.
    ///
    /// See [`Matching::Insensitive`]: the result carries the grammar's casing
    /// for literals and must not be used for byte-exact validation.
    pub fn parse_insensitively(&self, input: &str) -> Result<Captures, IdError> {
        self.parse(input, Matching::Insensitive)
    }

    /// Walks `input` against this grammar.
    pub fn parse(&self, input: &str, matching: Matching) -> Result<Captures, IdError> {
        if input.is_empty() {
            return Err(IdError::EmptyInput);
        }

        let path = input.strip_prefix('/').unwrap_or(input);
        let (path, trailing_slash) = match path.strip_suffix('/') {
            Some(rest) => (rest, true),
            None => (path, false),
        };
        let parts: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };

        let mut fields = Vec::with_capacity(self.capture_count());

        for (position, segment) in self.segments().iter().enumerate() {
            let Some(&part) = parts.get(position) else {
                // A trailing slash directly before a capture means the value
                // is present but empty, e.g. `/subscriptions/`.
                return Err(match *segment {
                    Segment::Capture(field) if trailing_slash && position == parts.len() => {
                        IdError::EmptySegmentValue(field)
                    }
                    _ => IdError::MissingSegment(segment.label()),
                });
            };

            match *segment {
                Segment::Literal(label) => match matching {
                    Matching::Strict if part != label => {
                        return Err(IdError::LiteralMismatch {
                            expected: label,
                            actual: part.to_string(),
                        });
                    }
                    Matching::Insensitive if !part.eq_ignore_ascii_case(label) => {
                        return Err(IdError::MissingSegment(label));
                    }
                    Matching::Insensitive if part != label => {
                        trace!(
                            kind = self.kind(),
                            expected = label,
                            actual = part,
                            "normalized literal casing"
                        );
                    }
                    _ => {}
                },
                Segment::Capture(field) => {
                    if part.is_empty() {
                        return Err(IdError::EmptySegmentValue(field));
                    }
                    fields.push((field, part.to_string()));
                }
            }
        }

        if parts.len() > self.segments().len() {
            return Err(IdError::TrailingSegments(
                parts[self.segments().len()..].join("/"),
            ));
        }

        Ok(Captures { fields })
    }

    /// Binds named values to this grammar's captures, in grammar order.
    ///
    /// Names not in the grammar are ignored. A capture without a value is
    /// reported as missing, one with an empty value as empty.
    pub fn bind<'a, I>(&self, values: I) -> Result<Captures, IdError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let values: Vec<(&str, &str)> = values.into_iter().collect();
        let mut fields = Vec::with_capacity(self.capture_count());

        for field in self.capture_names() {
            let Some((_, value)) = values.iter().find(|(name, _)| *name == field) else {
                return Err(IdError::MissingSegment(field));
            };
            if value.is_empty() {
                return Err(IdError::EmptySegmentValue(field));
            }
            fields.push((field, (*value).to_string()));
        }

        Ok(Captures { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Segment::{Capture, Literal};

    const STORE: Grammar = Grammar::new(
        "Store",
        &[
            Literal("subscriptions"),
            Capture("SubscriptionId"),
            Literal("stores"),
            Capture("Name"),
        ],
    );

    #[test]
    fn test_parse_strict() {
        let captures = STORE.parse_strict("/subscriptions/s1/stores/st1").unwrap();
        assert_eq!(captures.get("SubscriptionId"), Some("s1"));
        assert_eq!(captures.get("Name"), Some("st1"));
        assert_eq!(captures.get("Other"), None);
        assert_eq!(captures.len(), 2);
    }

    #[test]
    fn test_leading_slash_is_optional() {
        assert_eq!(
            STORE.parse_strict("subscriptions/s1/stores/st1"),
            STORE.parse_strict("/subscriptions/s1/stores/st1")
        );
    }

    #[test]
    fn test_single_trailing_slash_is_accepted() {
        assert_eq!(
            STORE.parse_strict("/subscriptions/s1/stores/st1/"),
            STORE.parse_strict("/subscriptions/s1/stores/st1")
        );
    }

    #[test]
    fn test_root_only_is_missing_first_literal() {
        assert_eq!(
            STORE.parse_strict("/"),
            Err(IdError::MissingSegment("subscriptions"))
        );
    }

    #[test]
    fn test_trailing_slash_before_capture_is_empty_value() {
        assert_eq!(
            STORE.parse_strict("/subscriptions/"),
            Err(IdError::EmptySegmentValue("SubscriptionId"))
        );
        assert_eq!(
            STORE.parse_strict("/subscriptions"),
            Err(IdError::MissingSegment("SubscriptionId"))
        );
    }

    #[test]
    fn test_trailing_slash_before_literal_is_missing() {
        assert_eq!(
            STORE.parse_strict("/subscriptions/s1/"),
            Err(IdError::MissingSegment("stores"))
        );
    }

    #[test]
    fn test_interior_empty_capture() {
        assert_eq!(
            STORE.parse_strict("/subscriptions//stores/st1"),
            Err(IdError::EmptySegmentValue("SubscriptionId"))
        );
    }

    #[test]
    fn test_interior_empty_literal_is_mismatch() {
        assert_eq!(
            STORE.parse_strict("/subscriptions/s1//st1"),
            Err(IdError::LiteralMismatch {
                expected: "stores",
                actual: String::new(),
            })
        );
    }

    #[test]
    fn test_trailing_segments() {
        assert_eq!(
            STORE.parse_strict("/subscriptions/s1/stores/st1/extra/more"),
            Err(IdError::TrailingSegments("extra/more".to_string()))
        );
    }

    #[test]
    fn test_insensitive_keeps_capture_casing() {
        let captures = STORE
            .parse_insensitively("/SUBSCRIPTIONS/Sub-A/Stores/MyStore")
            .unwrap();
        assert_eq!(captures.get("SubscriptionId"), Some("Sub-A"));
        assert_eq!(captures.get("Name"), Some("MyStore"));
    }

    #[test]
    fn test_insensitive_unmatched_literal_is_missing() {
        assert_eq!(
            STORE.parse_insensitively("/subscriptions/s1/shops/st1"),
            Err(IdError::MissingSegment("stores"))
        );
    }

    #[test]
    fn test_into_values() {
        let captures = STORE.parse_strict("/subscriptions/s1/stores/st1").unwrap();
        let [subscription, name] = captures.into_values();
        assert_eq!(subscription, "s1");
        assert_eq!(name, "st1");
    }

    #[test]
    #[should_panic(expected = "expected 3 captured values, got 2")]
    fn test_into_values_rejects_wrong_count() {
        let captures = STORE.parse_strict("/subscriptions/s1/stores/st1").unwrap();
        let _: [String; 3] = captures.into_values();
    }

    #[test]
    fn test_bind() {
        let captures = STORE
            .bind([("Name", "st1"), ("SubscriptionId", "s1"), ("Ignored", "x")])
            .unwrap();
        assert_eq!(captures.values().collect::<Vec<_>>(), ["s1", "st1"]);

        assert_eq!(
            STORE.bind([("Name", "st1")]),
            Err(IdError::MissingSegment("SubscriptionId"))
        );
        assert_eq!(
            STORE.bind([("SubscriptionId", "s1"), ("Name", "")]),
            Err(IdError::EmptySegmentValue("Name"))
        );
    }
}
