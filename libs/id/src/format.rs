//! Rendering identifiers back into canonical path strings.

use crate::{Captures, Grammar, Segment};

impl Grammar {
    /// Renders the canonical path for the given capture values.
    ///
    /// `values` are taken in grammar order, exactly one per capture. Literal
    /// segments always use the grammar's casing.
    ///
    /// # Panics
    ///
    /// Panics if the number of values differs from the capture count.
    #[must_use]
    pub(crate) fn format<S: AsRef<str>>(&self, values: &[S]) -> String {
        self.assert_value_count(values.len());

        let mut values = values.iter();
        let mut out = String::new();
        for segment in self.segments() {
            out.push('/');
            match segment {
                Segment::Literal(label) => out.push_str(label),
                Segment::Capture(_) => {
                    if let Some(value) = values.next() {
                        out.push_str(value.as_ref());
                    }
                }
            }
        }
        out
    }

    /// Renders the canonical path for a parsed set of captures.
    ///
    /// `captures` must come from this grammar.
    #[must_use]
    pub fn format_captures(&self, captures: &Captures) -> String {
        let values: Vec<&str> = captures.values().collect();
        self.format(&values)
    }

    /// Human-readable description of an identifier of this kind.
    ///
    /// Fields are listed innermost first and the subscription is omitted:
    /// `Private Endpoint Connection: (Name "c1" / Vault Name "v1" / Resource Group "rg1")`.
    ///
    /// # Panics
    ///
    /// Panics if the number of values differs from the capture count.
    #[must_use]
    pub(crate) fn describe<S: AsRef<str>>(&self, values: &[S]) -> String {
        self.assert_value_count(values.len());

        let mut fields: Vec<String> = self
            .capture_names()
            .zip(values)
            .filter(|(field, _)| *field != "SubscriptionId")
            .map(|(field, value)| format!("{} {:?}", humanize(field), value.as_ref()))
            .collect();
        fields.reverse();
        format!("{}: ({})", humanize(self.kind()), fields.join(" / "))
    }

    /// Human-readable description for a parsed set of captures.
    #[must_use]
    pub fn describe_captures(&self, captures: &Captures) -> String {
        let values: Vec<&str> = captures.values().collect();
        self.describe(&values)
    }

    fn assert_value_count(&self, count: usize) {
        assert_eq!(
            count,
            self.capture_count(),
            "{} takes {} values",
            self.kind(),
            self.capture_count()
        );
    }
}

/// Splits a PascalCase name into words, keeping acronyms together.
///
/// `ManagedHSMName` becomes `Managed HSM Name`.
pub(crate) fn humanize(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}
