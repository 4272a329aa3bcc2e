//! Typed identifier definitions for the built-in resource kinds.
//!
//! Each kind is a single grammar declaration; parsing and formatting come from
//! the shared engine.

use crate::{define_resource_id, Grammar};

// =============================================================================
// Resource Manager scopes
// =============================================================================

define_resource_id! {
    /// A subscription.
    SubscriptionId("Subscription") {
        "subscriptions" => subscription_id: "SubscriptionId",
    }
}

define_resource_id! {
    /// A resource group within a subscription.
    ResourceGroupId("ResourceGroup") {
        "subscriptions" => subscription_id: "SubscriptionId",
        "resourceGroups" => resource_group: "ResourceGroup",
    }
}

// =============================================================================
// Key Vault
// =============================================================================

define_resource_id! {
    /// A Key Vault.
    VaultId("Vault") {
        "subscriptions" => subscription_id: "SubscriptionId",
        "resourceGroups" => resource_group: "ResourceGroup",
        "providers",
        "Microsoft.KeyVault",
        "vaults" => name: "Name",
    }
}

define_resource_id! {
    /// A private endpoint connection to a Key Vault.
    PrivateEndpointConnectionId("PrivateEndpointConnection") {
        "subscriptions" => subscription_id: "SubscriptionId",
        "resourceGroups" => resource_group: "ResourceGroup",
        "providers",
        "Microsoft.KeyVault",
        "vaults" => vault_name: "VaultName",
        "privateEndpointConnections" => name: "Name",
    }
}

define_resource_id! {
    /// A managed HSM pool.
    ManagedHsmId("ManagedHSM") {
        "subscriptions" => subscription_id: "SubscriptionId",
        "resourceGroups" => resource_group: "ResourceGroup",
        "providers",
        "Microsoft.KeyVault",
        "managedHSMs" => name: "Name",
    }
}

define_resource_id! {
    /// A private endpoint connection to a managed HSM pool.
    ManagedHsmPrivateEndpointConnectionId("ManagedHSMPrivateEndpointConnection") {
        "subscriptions" => subscription_id: "SubscriptionId",
        "resourceGroups" => resource_group: "ResourceGroup",
        "providers",
        "Microsoft.KeyVault",
        "managedHSMs" => managed_hsm_name: "ManagedHSMName",
        "privateEndpointConnections" => name: "Name",
    }
}

// =============================================================================
// Synapse
// =============================================================================

define_resource_id! {
    /// A Synapse workspace.
    WorkspaceId("Workspace") {
        "subscriptions" => subscription_id: "SubscriptionId",
        "resourceGroups" => resource_group: "ResourceGroup",
        "providers",
        "Microsoft.Synapse",
        "workspaces" => name: "Name",
    }
}

define_resource_id! {
    /// The extended auditing policy of a Synapse workspace.
    WorkspaceExtendedAuditingPolicyId("WorkspaceExtendedAuditingPolicy") {
        "subscriptions" => subscription_id: "SubscriptionId",
        "resourceGroups" => resource_group: "ResourceGroup",
        "providers",
        "Microsoft.Synapse",
        "workspaces" => workspace_name: "WorkspaceName",
        "extendedAuditingSettings" => extended_auditing_setting_name: "ExtendedAuditingSettingName",
    }
}

// =============================================================================
// App Configuration
// =============================================================================

define_resource_id! {
    /// An App Configuration store.
    ConfigurationStoreId("ConfigurationStore") {
        "subscriptions" => subscription_id: "SubscriptionId",
        "resourceGroups" => resource_group: "ResourceGroup",
        "providers",
        "Microsoft.AppConfiguration",
        "configurationStores" => name: "Name",
    }
}

// =============================================================================
// HDInsight
// =============================================================================

define_resource_id! {
    /// An HDInsight cluster.
    ClusterId("Cluster") {
        "subscriptions" => subscription_id: "SubscriptionId",
        "resourceGroups" => resource_group: "ResourceGroup",
        "providers",
        "Microsoft.HDInsight",
        "clusters" => name: "Name",
    }
}

/// Grammars of every built-in kind, in registration order.
pub(crate) const BUILTIN: &[&Grammar] = &[
    SubscriptionId::GRAMMAR,
    ResourceGroupId::GRAMMAR,
    VaultId::GRAMMAR,
    PrivateEndpointConnectionId::GRAMMAR,
    ManagedHsmId::GRAMMAR,
    ManagedHsmPrivateEndpointConnectionId::GRAMMAR,
    WorkspaceId::GRAMMAR,
    WorkspaceExtendedAuditingPolicyId::GRAMMAR,
    ConfigurationStoreId::GRAMMAR,
    ClusterId::GRAMMAR,
];

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IdError;

    const VAULT: &str =
        "/subscriptions/SUB1/resourceGroups/RG1/providers/Microsoft.KeyVault/vaults/V1";

    #[test]
    fn test_vault_id_roundtrip() {
        let id = VaultId::parse(VAULT).unwrap();
        assert_eq!(id, VaultId::new("SUB1", "RG1", "V1"));
        assert_eq!(id.id(), VAULT);
        assert_eq!(id.to_string(), VAULT);
    }

    #[test]
    fn test_vault_id_wrong_case_literal() {
        let input = "/subscriptions/SUB1/resourceGroups/RG1/providers/Microsoft.KeyVault/VAULTS/V1";
        assert!(matches!(
            VaultId::parse(input),
            Err(IdError::LiteralMismatch {
                expected: "vaults",
                ..
            })
        ));
        assert_eq!(
            VaultId::parse_insensitively(input).unwrap(),
            VaultId::new("SUB1", "RG1", "V1")
        );
    }

    #[test]
    fn test_vault_id_missing_name_value() {
        let input = "/subscriptions/SUB1/resourceGroups/RG1/providers/Microsoft.KeyVault/vaults/";
        assert_eq!(
            VaultId::parse(input).unwrap_err(),
            IdError::EmptySegmentValue("Name")
        );
    }

    #[test]
    fn test_vault_id_empty() {
        let result: Result<VaultId, _> = "".parse();
        assert_eq!(result.unwrap_err(), IdError::EmptyInput);
    }

    #[test]
    fn test_vault_id_upper_cased_everything() {
        let input = "/SUBSCRIPTIONS/{SUBSCRIPTIONID}/RESOURCEGROUPS/{RESOURCEGROUPNAME}/PROVIDERS/MICROSOFT.KEYVAULT/VAULTS/{VAULTNAME}";
        assert!(VaultId::parse(input).is_err());

        let id = VaultId::parse_insensitively(input).unwrap();
        assert_eq!(id.subscription_id, "{SUBSCRIPTIONID}");
        assert_eq!(id.resource_group, "{RESOURCEGROUPNAME}");
        assert_eq!(id.name, "{VAULTNAME}");
        assert_eq!(
            id.id(),
            "/subscriptions/{SUBSCRIPTIONID}/resourceGroups/{RESOURCEGROUPNAME}/providers/Microsoft.KeyVault/vaults/{VAULTNAME}"
        );
    }

    #[test]
    fn test_managed_hsm_connection_formatter() {
        let id = ManagedHsmPrivateEndpointConnectionId::new("sub", "rg", "hsm1", "conn1");
        assert_eq!(
            id.id(),
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.KeyVault/managedHSMs/hsm1/privateEndpointConnections/conn1"
        );
        assert_eq!(
            id.describe(),
            r#"Managed HSM Private Endpoint Connection: (Name "conn1" / Managed HSM Name "hsm1" / Resource Group "rg")"#
        );
    }

    #[test]
    fn test_workspace_extended_auditing_policy_formatter() {
        let id = WorkspaceExtendedAuditingPolicyId::new(
            "12345678-1234-9876-4563-123456789012",
            "resGroup1",
            "workspace1",
            "default",
        );
        assert_eq!(
            id.id(),
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/resGroup1/providers/Microsoft.Synapse/workspaces/workspace1/extendedAuditingSettings/default"
        );
    }

    #[test]
    fn test_resource_group_id() {
        let id = ResourceGroupId::parse("/subscriptions/s1/resourceGroups/rg1").unwrap();
        assert_eq!(id.resource_group, "rg1");
        assert_eq!(id.describe(), r#"Resource Group: (Resource Group "rg1")"#);
    }

    #[test]
    fn test_new_does_not_validate_values() {
        let id = VaultId::new("s", "rg", "a/b");
        assert_eq!(
            VaultId::parse(&id.id()),
            Err(IdError::TrailingSegments("b".to_string()))
        );

        let id = VaultId::new("s", "", "v");
        assert_eq!(
            VaultId::parse(&id.id()),
            Err(IdError::EmptySegmentValue("ResourceGroup"))
        );
    }

    #[test]
    fn test_vault_id_json_roundtrip() {
        let id = VaultId::new("SUB1", "RG1", "V1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{VAULT}\""));
        let parsed: VaultId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_json_rejects_malformed_id() {
        let result: Result<VaultId, _> = serde_json::from_str("\"/subscriptions/SUB1\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_all_kinds_unique() {
        let kinds: Vec<_> = BUILTIN.iter().map(|g| g.kind()).collect();
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(kinds.len(), unique.len(), "Duplicate resource kinds found!");
    }

    #[test]
    fn test_all_kinds_match_their_type_constants() {
        assert_eq!(VaultId::KIND, VaultId::GRAMMAR.kind());
        assert_eq!(ClusterId::KIND, "Cluster");
        assert_eq!(
            ConfigurationStoreId::GRAMMAR.template(),
            "/subscriptions/{SubscriptionId}/resourceGroups/{ResourceGroup}/providers/Microsoft.AppConfiguration/configurationStores/{Name}"
        );
    }
}
