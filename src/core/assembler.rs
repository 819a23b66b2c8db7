use crate::config::GenesisConfig;
use crate::contracts;
use crate::domain::model::GenesisSections;
use crate::utils::error::Result;
use chrono::Utc;

/// Assembles every configured contract section into one genesis document.
/// Section order is fixed: access-control contracts first, then the DID
/// registries, then the credential artifacts that reference them.
pub struct GenesisAssembler<'a> {
    config: &'a GenesisConfig,
}

impl<'a> GenesisAssembler<'a> {
    pub fn new(config: &'a GenesisConfig) -> Self {
        Self { config }
    }

    pub fn assemble(&self) -> Result<GenesisSections> {
        tracing::info!(
            network = %self.config.network.name,
            chain_id = self.config.network.chain_id,
            "Assembling genesis sections"
        );

        let mut sections = Vec::with_capacity(self.config.contract_count());

        if self.config.roles.is_some() {
            sections.push(contracts::build_role_control_section(self.config)?);
        }
        if self.config.validators.is_some() {
            sections.push(contracts::build_validator_control_section(self.config)?);
        }
        if self.config.did_ethr.is_some() {
            sections.push(contracts::build_did_ethr_registry_section(self.config)?);
        }
        if self.config.did_indy.is_some() {
            sections.push(contracts::build_did_indy_registry_section(self.config)?);
        }
        if self.config.schemas.is_some() {
            sections.push(contracts::build_schema_registry_section(self.config)?);
        }
        if self.config.credential_definitions.is_some() {
            sections.push(contracts::build_credential_definitions_section(self.config)?);
        }
        if self.config.legacy_mappings.is_some() {
            sections.push(contracts::build_legacy_mapping_registry_section(self.config)?);
        }

        for section in &sections {
            tracing::debug!(name = %section.name, address = %section.address, "Assembled section");
        }
        tracing::info!("Assembled {} sections", sections.len());

        Ok(GenesisSections {
            network: self.config.network.name.clone(),
            chain_id: self.config.network.chain_id,
            generated_at: Utc::now(),
            sections,
        })
    }

    pub fn assemble_json(&self) -> Result<String> {
        let document = self.assemble()?;
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_registry_config() -> GenesisConfig {
        GenesisConfig::from_toml_str(
            r#"
[network]
name = "localnet"
chain_id = 1337

[schemas]
name = "SchemaRegistry"
address = "0x0000000000000000000000000000000000005555"
description = "Registry of schemas"

[credential_definitions]
name = "CredentialDefinitionRegistry"
address = "0x0000000000000000000000000000000000004444"
description = "Registry of credential definitions"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_assembles_only_configured_sections_in_order() {
        let config = two_registry_config();
        let document = GenesisAssembler::new(&config).assemble().unwrap();

        let names: Vec<&str> = document.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["SchemaRegistry", "CredentialDefinitionRegistry"]);
        assert_eq!(document.network, "localnet");
        assert_eq!(document.chain_id, 1337);
    }

    #[test]
    fn test_empty_contract_set_assembles_to_empty_document() {
        let config = GenesisConfig::from_toml_str(
            r#"
[network]
name = "localnet"
chain_id = 1337
"#,
        )
        .unwrap();

        let document = GenesisAssembler::new(&config).assemble().unwrap();
        assert!(document.sections.is_empty());
    }

    #[test]
    fn test_json_output_contains_sections() {
        let config = two_registry_config();
        let json = GenesisAssembler::new(&config).assemble_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sections"].as_array().unwrap().len(), 2);
        assert_eq!(
            value["sections"][1]["address"],
            "0x0000000000000000000000000000000000004444"
        );
        assert!(value["generated_at"].is_string());
    }
}
