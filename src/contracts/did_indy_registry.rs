use crate::config::GenesisConfig;
use crate::core::section::build_section_from;
use crate::domain::model::ContractSection;
use crate::utils::error::{GenesisError, Result};

pub fn build_did_indy_registry_section(config: &GenesisConfig) -> Result<ContractSection> {
    let section = config
        .did_indy
        .as_ref()
        .ok_or_else(|| GenesisError::MissingConfigError {
            field: "did_indy".to_string(),
        })?;

    Ok(build_section_from(section))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_section_from_config_table() {
        let config = GenesisConfig::from_toml_str(
            r#"
[network]
name = "localnet"
chain_id = 1337

[did_indy]
name = "IndyDidRegistry"
address = "0x0000000000000000000000000000000000002222"
description = "Registry of indy DIDs"
"#,
        )
        .unwrap();

        let section = build_did_indy_registry_section(&config).unwrap();
        assert_eq!(section.address, "0x0000000000000000000000000000000000002222");
        assert!(section.storage.is_empty());
    }
}
