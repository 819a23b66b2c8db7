use crate::config::GenesisConfig;
use crate::core::section::build_section_from;
use crate::domain::model::ContractSection;
use crate::utils::error::{GenesisError, Result};

/// Build the genesis section for the validator control contract. Validator
/// entries listed under `validators.data` are parsed but not materialized
/// into storage.
pub fn build_validator_control_section(config: &GenesisConfig) -> Result<ContractSection> {
    let section = config
        .validators
        .as_ref()
        .ok_or_else(|| GenesisError::MissingConfigError {
            field: "validators".to_string(),
        })?;

    if !section.data.validators.is_empty() {
        tracing::warn!(
            count = section.data.validators.len(),
            "validators.data lists validators that will not be materialized into storage"
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

[validators]
name = "ValidatorControl"
address = "0x0000000000000000000000000000000000008888"
description = "Validator node registry"

[[validators.data.validators]]
account = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
validator = "0x93917cadbace5dfce132b991732c6cda9bcc5b8a"
"#,
        )
        .unwrap();

        let section = build_validator_control_section(&config).unwrap();
        assert_eq!(section.name, "ValidatorControl");
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
            build_validator_control_section(&config).unwrap_err(),
            GenesisError::MissingConfigError { ref field } if field == "validators"
        ));
    }
}
