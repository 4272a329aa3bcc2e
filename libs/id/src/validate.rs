//! Validators for the configuration layer.
//!
//! Configuration values arrive untyped (a JSON value keyed by attribute name),
//! so these helpers check the value is a string before strictly parsing it.

use serde_json::Value;
use thiserror::Error;

use crate::{IdError, ResourceId};

/// A single validation failure for one configuration key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected {key:?} to be a string")]
    NotAString { key: String },

    #[error("{key:?} is not a valid {kind} ID: {source}")]
    InvalidId {
        key: String,
        kind: &'static str,
        #[source]
        source: IdError,
    },
}

/// Warnings and errors collected by a validator.
///
/// Mirrors the `(warnings, errors)` pair returned by configuration-layer
/// validators. Identifier checks only produce errors, so `warnings` stays
/// empty here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub warnings: Vec<String>,
    pub errors: Vec<ValidationError>,
}

impl Diagnostics {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates that `value` is a canonical identifier of kind `T`.
///
/// ```
/// use armid::{validate, VaultId};
/// use serde_json::json;
///
/// let ok = validate::resource_id::<VaultId>(
///     &json!("/subscriptions/s/resourceGroups/rg/providers/Microsoft.KeyVault/vaults/v"),
///     "key_vault_id",
/// );
/// assert!(ok.is_ok());
///
/// let bad = validate::resource_id::<VaultId>(&json!(42), "key_vault_id");
/// assert_eq!(bad.errors[0].to_string(), r#"expected "key_vault_id" to be a string"#);
/// ```
pub fn resource_id<T: ResourceId>(value: &Value, key: &str) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();

    let Some(input) = value.as_str() else {
        diagnostics.errors.push(ValidationError::NotAString {
            key: key.to_string(),
        });
        return diagnostics;
    };

    if let Err(source) = T::parse(input) {
        diagnostics.errors.push(ValidationError::InvalidId {
            key: key.to_string(),
            kind: T::GRAMMAR.kind(),
            source,
        });
    }

    diagnostics
}

/// Import check: the identifier being imported must be canonical.
pub fn importer<T: ResourceId>(id: &str) -> Result<(), IdError> {
    T::parse(id).map(|_| ())
}
