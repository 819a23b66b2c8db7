use crate::config::GenesisConfig;
use crate::core::section::build_section_from;
use crate::domain::model::ContractSection;
use crate::utils::error::{GenesisError, Result};

/// Build the genesis section for the legacy identifier mapping registry.
/// Mappings listed under `legacy_mappings.data` are parsed but not
/// materialized into storage.
pub fn build_legacy_mapping_registry_section(config: &GenesisConfig) -> Result<ContractSection> {
    let section = config
        .legacy_mappings
        .as_ref()
        .ok_or_else(|| GenesisError::MissingConfigError {
            field: "legacy_mappings".to_string(),
        })?;

    if !section.data.mappings.is_empty() {
        tracing::warn!(
            count = section.data.mappings.len(),
            "legacy_mappings.data lists mappings that will not be materialized into storage"
        );
    }

    Ok(build_section_from(section))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_section_with_empty_storage() {
        let config = GenesisConfig::from_toml_str(
            r#"
[network]
name = "localnet"
chain_id = 1337

[legacy_mappings]
name = "LegacyMappingRegistry"
address = "0x0000000000000000000000000000000000006666"
description = "Mapping of legacy identifiers to DIDs"

[[legacy_mappings.data.mappings]]
legacy_did = "2PRyVHmkXQnQzJQKxHxnXC"
did = "did:ethr:0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
"#,
        )
        .unwrap();

        let section = build_legacy_mapping_registry_section(&config).unwrap();
        assert_eq!(section.name, "LegacyMappingRegistry");
        assert!(section.storage.is_empty());
    }
}
