use crate::config::GenesisConfig;
use crate::core::section::build_section_from;
use crate::domain::model::ContractSection;
use crate::utils::error::{GenesisError, Result};

/// Build the genesis section for the schema registry. Schemas listed under
/// `schemas.data` are parsed but not materialized into storage.
pub fn build_schema_registry_section(config: &GenesisConfig) -> Result<ContractSection> {
    let section = config
        .schemas
        .as_ref()
        .ok_or_else(|| GenesisError::MissingConfigError {
            field: "schemas".to_string(),
        })?;

    if !section.data.schemas.is_empty() {
        tracing::warn!(
            count = section.data.schemas.len(),
            "schemas.data lists schemas that will not be materialized into storage"
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

[schemas]
name = "SchemaRegistry"
address = "0x0000000000000000000000000000000000005555"
description = "Registry of schemas"

[[schemas.data.schemas]]
id = "did:indy:test:schema-1"
data = { name = "EmploymentRecord" }
"#,
        )
        .unwrap();

        let section = build_schema_registry_section(&config).unwrap();
        assert_eq!(section.name, "SchemaRegistry");
        assert_eq!(section.address, "0x0000000000000000000000000000000000005555");
        assert!(section.storage.is_empty());
    }

    #[test]
    fn test_missing_table_fails() {
        let config = GenesisConfig::from_toml_str(
            r#"
[network]
name = "localnet"
chain_id = 1337
"#,
        )
        .unwrap();

        assert!(matches!(
            build_schema_registry_section(&config).unwrap_err(),
            GenesisError::MissingConfigError { ref field } if field == "schemas"
        ));
    }
}
