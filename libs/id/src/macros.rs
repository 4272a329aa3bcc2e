//! Macros for declaring typed identifier kinds.

/// Declares a typed identifier from its path grammar.
///
/// Each `"label" => field: "Field"` entry is a literal key followed by a
/// captured value; a bare `"label"` entry is a literal with no value (such as
/// a provider namespace). The macro generates:
///
/// - a struct with one `String` field per capture
/// - `KIND` and `GRAMMAR` constants, the grammar validated at compile time
/// - `new()`, `parse()`, `parse_insensitively()`, `id()` and `describe()`
/// - [`ResourceId`](crate::ResourceId), `Display`, `FromStr`, `Serialize` and
///   `Deserialize` implementations, all using the canonical string form
///
/// # Example
///
/// ```
/// armid::define_resource_id! {
///     /// A widget in a Contoso account.
///     WidgetId("Widget") {
///         "subscriptions" => subscription_id: "SubscriptionId",
///         "providers",
///         "Contoso.Things",
///         "widgets" => name: "Name",
///     }
/// }
///
/// let id = WidgetId::new("sub1", "w1");
/// assert_eq!(id.id(), "/subscriptions/sub1/providers/Contoso.Things/widgets/w1");
/// assert_eq!(WidgetId::parse(&id.id()).unwrap(), id);
/// ```
#[macro_export]
macro_rules! define_resource_id {
    // A literal key followed by its captured value.
    (@munch [$($meta:tt)*] $name:ident $kind:literal
        [$($seg:expr,)*] [$($field:ident $display:literal,)*]
        $label:literal => $next:ident : $next_display:literal $(, $($rest:tt)*)?
    ) => {
        $crate::define_resource_id!(@munch [$($meta)*] $name $kind
            [$($seg,)* $crate::Segment::Literal($label), $crate::Segment::Capture($next_display),]
            [$($field $display,)* $next $next_display,]
            $($($rest)*)?
        );
    };

    // A literal with no value.
    (@munch [$($meta:tt)*] $name:ident $kind:literal
        [$($seg:expr,)*] [$($field:ident $display:literal,)*]
        $label:literal $(, $($rest:tt)*)?
    ) => {
        $crate::define_resource_id!(@munch [$($meta)*] $name $kind
            [$($seg,)* $crate::Segment::Literal($label),]
            [$($field $display,)*]
            $($($rest)*)?
        );
    };

    (@munch [$($meta:tt)*] $name:ident $kind:literal
        [$($seg:expr,)*] [$($field:ident $display:literal,)*]
    ) => {
        $($meta)*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            $(
                #[doc = concat!("The `", $display, "` segment.")]
                pub $field: String,
            )*
        }

        impl $name {
            /// The identifier kind.
            pub const KIND: &'static str = $kind;

            /// The path grammar for this kind.
            pub const GRAMMAR: &'static $crate::Grammar =
                &$crate::Grammar::new($kind, &[$($seg,)*]);

            /// Creates an identifier from known field values.
            ///
            /// Values are not validated: `id()` only parses back to the same
            /// identifier when every value is non-empty and contains no `/`.
            #[must_use]
            pub fn new($($field: impl Into<String>),*) -> Self {
                Self {
                    $($field: $field.into(),)*
                }
            }

            /// Parses a canonical identifier, requiring exact-case literals.
            pub fn parse(input: &str) -> Result<Self, $crate::IdError> {
                <Self as $crate::ResourceId>::parse(input)
            }

            /// Parses an identifier case-insensitively, normalizing literal
            /// casing. Not suitable for validation; use [`Self::parse`].
            pub fn parse_insensitively(input: &str) -> Result<Self, $crate::IdError> {
                <Self as $crate::ResourceId>::parse_insensitively(input)
            }

            /// Formats the canonical path.
            #[must_use]
            pub fn id(&self) -> String {
                <Self as $crate::ResourceId>::id(self)
            }

            /// Human-readable description of this identifier.
            #[must_use]
            pub fn describe(&self) -> String {
                <Self as $crate::ResourceId>::describe(self)
            }
        }

        impl $crate::ResourceId for $name {
            const GRAMMAR: &'static $crate::Grammar = $name::GRAMMAR;

            fn from_captures(captures: $crate::Captures) -> Self {
                let [$($field,)*] = captures.into_values();
                Self { $($field,)* }
            }

            fn segment_values(&self) -> Vec<&str> {
                vec![$(self.$field.as_str(),)*]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.id())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::__private::serde::de::Error::custom)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident($kind:literal) { $($body:tt)* }
    ) => {
        $crate::define_resource_id!(@munch [$(#[$meta])*] $name $kind [] [] $($body)*);
    };
}
