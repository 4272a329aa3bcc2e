//! Data-plane identifiers nested under a service URL.
//!
//! These are not Resource Manager paths: the identifier is an absolute URL
//! whose path is a free-form scope followed by a fixed type/name tail, e.g.
//! `https://myhsm.managedhsm.azure.net/keys/RoleDefinition/<uuid>`. Only the
//! tail has a grammar; the scope is kept verbatim.

use url::Url;

use crate::{Grammar, IdError, Segment};

/// The managed HSM role definition identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagedHsmRoleDefinitionId {
    /// Base URL of the HSM, always ending in `/`.
    pub vault_base_url: String,
    /// Role scope, such as `/` or `keys`.
    pub scope: String,
    pub name: String,
}

impl ManagedHsmRoleDefinitionId {
    /// Grammar for the `RoleDefinition/{Name}` tail.
    pub const TAIL: &'static Grammar = &Grammar::new(
        "ManagedHSMRoleDefinition",
        &[Segment::Literal("RoleDefinition"), Segment::Capture("Name")],
    );

    /// Creates an identifier, validating the base URL.
    pub fn new(
        vault_base_url: &str,
        scope: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, IdError> {
        if vault_base_url.is_empty() {
            return Err(IdError::EmptyInput);
        }
        let url = Url::parse(vault_base_url).map_err(|e| IdError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            vault_base_url: url.to_string(),
            scope: scope.into(),
            name: name.into(),
        })
    }

    /// Parses `https://<host>/<scope>/RoleDefinition/<name>`.
    pub fn parse(input: &str) -> Result<Self, IdError> {
        if input.is_empty() {
            return Err(IdError::EmptyInput);
        }
        let url = Url::parse(input).map_err(|e| IdError::InvalidUrl(e.to_string()))?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(IdError::InvalidUrl(format!("'{input}' has no host")));
        }

        let path = url.path();
        let path = path.strip_prefix('/').unwrap_or(path);
        // With an empty name only the untrimmed path still has three parts,
        // and the `RoleDefinition/` tail reaches the grammar as an empty value.
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let path = if trimmed.matches('/').count() >= 2 {
            trimmed
        } else {
            path
        };

        let mut parts = path.rsplitn(3, '/');
        let (Some(name), Some(kind), Some(scope)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(IdError::MissingSegment("Scope"));
        };
        if scope.is_empty() {
            return Err(IdError::MissingSegment("Scope"));
        }

        let tail = Self::TAIL.parse_strict(&format!("{kind}/{name}"))?;
        let [name] = tail.into_values();

        Ok(Self {
            vault_base_url: format!("{}/", url.origin().ascii_serialization()),
            scope: scope.to_string(),
            name,
        })
    }

    /// Formats the identifier URL.
    #[must_use]
    pub fn id(&self) -> String {
        let base = self.vault_base_url.trim_end_matches('/');
        let joined = [base, &self.scope, "RoleDefinition", &self.name].join("/");
        joined.trim_end_matches('/').to_string()
    }
}

impl std::fmt::Display for ManagedHsmRoleDefinitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}

impl std::str::FromStr for ManagedHsmRoleDefinitionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
