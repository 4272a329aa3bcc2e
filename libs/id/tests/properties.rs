//! Property-based tests using proptest
//!
//! These check the parser/formatter contract over every built-in grammar with
//! randomized field values and casing.

use armid::{Grammar, IdError, Registry, Segment, VaultId};
use proptest::prelude::*;

/// Capture values: non-empty, no separators.
fn arb_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9{}._-]{1,24}"
}

/// A built-in grammar together with values for each of its captures.
fn arb_grammar_with_values() -> impl Strategy<Value = (&'static Grammar, Vec<String>)> {
    let grammars: Vec<&'static Grammar> = Registry::builtin().grammars().collect();
    prop::sample::select(grammars).prop_flat_map(|grammar| {
        let count = grammar.capture_count();
        (
            Just(grammar),
            prop::collection::vec(arb_value(), count..=count),
        )
    })
}

/// Binds `values` to the grammar's captures in order and formats them.
fn format_values(grammar: &Grammar, values: &[String]) -> String {
    let pairs: Vec<(&str, &str)> = grammar
        .capture_names()
        .zip(values.iter().map(String::as_str))
        .collect();
    let captures = grammar.bind(pairs).unwrap();
    grammar.format_captures(&captures)
}

/// Re-cases one literal segment so that it differs from the canonical label.
fn recase(label: &str) -> String {
    let upper = label.to_uppercase();
    if upper != label {
        upper
    } else {
        label.to_lowercase()
    }
}

fn literal_positions(grammar: &Grammar) -> Vec<usize> {
    grammar
        .segments()
        .iter()
        .enumerate()
        .filter(|(_, segment)| !segment.is_capture())
        .map(|(position, _)| position)
        .collect()
}

fn capture_positions(grammar: &Grammar) -> Vec<usize> {
    grammar
        .segments()
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.is_capture())
        .map(|(position, _)| position)
        .collect()
}

/// Replaces the path component at `position` (grammar index) with `with`.
fn replace_component(canonical: &str, position: usize, with: &str) -> String {
    let mut parts: Vec<&str> = canonical.trim_start_matches('/').split('/').collect();
    parts[position] = with;
    format!("/{}", parts.join("/"))
}

proptest! {
    /// parse(format(values)) yields the same values, and format is a fixed point
    #[test]
    fn roundtrip((grammar, values) in arb_grammar_with_values()) {
        let canonical = format_values(grammar, &values);
        let captures = grammar.parse_strict(&canonical).unwrap();
        let parsed: Vec<&str> = captures.values().collect();
        prop_assert_eq!(&parsed, &values);
        prop_assert_eq!(grammar.format_captures(&captures), canonical);
    }

    /// Any re-cased literal breaks strict parsing but not insensitive parsing
    #[test]
    fn strict_rejects_case_variation(
        (grammar, values) in arb_grammar_with_values(),
        pick in any::<prop::sample::Index>(),
    ) {
        let canonical = format_values(grammar, &values);
        let positions = literal_positions(grammar);
        let position = positions[pick.index(positions.len())];
        let Segment::Literal(label) = grammar.segments()[position] else {
            unreachable!("literal_positions only yields literals");
        };
        let variant = replace_component(&canonical, position, &recase(label));

        let is_mismatch = matches!(
            grammar.parse_strict(&variant),
            Err(IdError::LiteralMismatch { .. })
        );
        prop_assert!(is_mismatch);
        prop_assert_eq!(
            grammar.parse_insensitively(&variant).unwrap(),
            grammar.parse_strict(&canonical).unwrap()
        );
    }

    /// Truncating before the final segment reports a missing segment
    #[test]
    fn truncation_is_missing_segment(
        (grammar, values) in arb_grammar_with_values(),
        pick in any::<prop::sample::Index>(),
    ) {
        let canonical = format_values(grammar, &values);
        let slashes: Vec<usize> = canonical
            .match_indices('/')
            .map(|(index, _)| index)
            .filter(|&index| index > 0)
            .collect();
        let cut = slashes[pick.index(slashes.len())];
        let truncated = &canonical[..cut];

        let is_missing = matches!(
            grammar.parse_strict(truncated),
            Err(IdError::MissingSegment(_))
        );
        prop_assert!(is_missing);
    }

    /// Appending a non-empty segment reports trailing segments
    #[test]
    fn extra_segment_is_trailing(
        (grammar, values) in arb_grammar_with_values(),
        extra in arb_value(),
    ) {
        let canonical = format_values(grammar, &values);
        prop_assert_eq!(
            grammar.parse_strict(&format!("{canonical}/{extra}")),
            Err(IdError::TrailingSegments(extra))
        );
    }

    /// Emptying any capture reports that capture's field
    #[test]
    fn empty_capture_names_field(
        (grammar, values) in arb_grammar_with_values(),
        pick in any::<prop::sample::Index>(),
    ) {
        let canonical = format_values(grammar, &values);
        let positions = capture_positions(grammar);
        let position = positions[pick.index(positions.len())];
        let field = grammar.segments()[position].label();
        let emptied = replace_component(&canonical, position, "");

        prop_assert_eq!(
            grammar.parse_strict(&emptied),
            Err(IdError::EmptySegmentValue(field))
        );
    }

    /// Typed parsing agrees with construction
    #[test]
    fn vault_id_roundtrip(
        subscription in arb_value(),
        resource_group in arb_value(),
        name in arb_value(),
    ) {
        let id = VaultId::new(subscription, resource_group, name);
        prop_assert_eq!(VaultId::parse(&id.id()).unwrap(), id.clone());

        let shouted = VaultId::parse_insensitively(&id.id().to_uppercase()).unwrap();
        prop_assert!(shouted.id().contains("/providers/Microsoft.KeyVault/vaults/"));
        prop_assert_eq!(shouted.name, id.name.to_uppercase());
    }
}
