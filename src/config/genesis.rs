use crate::domain::model::{CredentialDefinition, DidMapping, RoleAssignment, Schema, ValidatorInfo};
use crate::domain::ports::ContractConfig;
use crate::utils::error::{GenesisError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Genesis configuration, passed explicitly into every section builder.
/// Contract tables are optional; only configured contracts get a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisConfig {
    pub network: NetworkConfig,
    pub credential_definitions: Option<CredentialDefinitionsConfig>,
    pub schemas: Option<SchemaRegistryConfig>,
    pub did_ethr: Option<DidEthrRegistryConfig>,
    pub did_indy: Option<DidIndyRegistryConfig>,
    pub legacy_mappings: Option<LegacyMappingRegistryConfig>,
    pub roles: Option<RoleControlConfig>,
    pub validators: Option<ValidatorControlConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialDefinitionsConfig {
    pub name: String,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub data: CredentialDefinitionsData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialDefinitionsData {
    #[serde(default)]
    pub definitions: Vec<CredentialDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRegistryConfig {
    pub name: String,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub data: SchemaRegistryData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaRegistryData {
    #[serde(default)]
    pub schemas: Vec<Schema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidEthrRegistryConfig {
    pub name: String,
    pub address: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidIndyRegistryConfig {
    pub name: String,
    pub address: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyMappingRegistryConfig {
    pub name: String,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub data: LegacyMappingRegistryData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyMappingRegistryData {
    #[serde(default)]
    pub mappings: Vec<DidMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleControlConfig {
    pub name: String,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub data: RoleControlData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleControlData {
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorControlConfig {
    pub name: String,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub data: ValidatorControlData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorControlData {
    #[serde(default)]
    pub validators: Vec<ValidatorInfo>,
}

impl ContractConfig for CredentialDefinitionsConfig {
    fn name(&self) -> &str {
        &self.name
    }
    fn address(&self) -> &str {
        &self.address
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl ContractConfig for SchemaRegistryConfig {
    fn name(&self) -> &str {
        &self.name
    }
    fn address(&self) -> &str {
        &self.address
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl ContractConfig for DidEthrRegistryConfig {
    fn name(&self) -> &str {
        &self.name
    }
    fn address(&self) -> &str {
        &self.address
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl ContractConfig for DidIndyRegistryConfig {
    fn name(&self) -> &str {
        &self.name
    }
    fn address(&self) -> &str {
        &self.address
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl ContractConfig for LegacyMappingRegistryConfig {
    fn name(&self) -> &str {
        &self.name
    }
    fn address(&self) -> &str {
        &self.address
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl ContractConfig for RoleControlConfig {
    fn name(&self) -> &str {
        &self.name
    }
    fn address(&self) -> &str {
        &self.address
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl ContractConfig for ValidatorControlConfig {
    fn name(&self) -> &str {
        &self.name
    }
    fn address(&self) -> &str {
        &self.address
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl GenesisConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GenesisError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GenesisError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute environment variables (e.g. ${REGISTRY_ADDRESS}).
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("network.name", &self.network.name)?;
        validation::validate_positive_number("network.chain_id", self.network.chain_id, 1)?;

        if let Some(section) = &self.credential_definitions {
            validate_section("credential_definitions", section)?;
        }
        if let Some(section) = &self.schemas {
            validate_section("schemas", section)?;
        }
        if let Some(section) = &self.did_ethr {
            validate_section("did_ethr", section)?;
        }
        if let Some(section) = &self.did_indy {
            validate_section("did_indy", section)?;
        }
        if let Some(section) = &self.legacy_mappings {
            validate_section("legacy_mappings", section)?;
        }
        if let Some(section) = &self.roles {
            validate_section("roles", section)?;
        }
        if let Some(section) = &self.validators {
            validate_section("validators", section)?;
        }

        Ok(())
    }

    /// Table names of the contracts present in this config, in assembly order.
    pub fn configured_contracts(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.roles.is_some() {
            names.push("roles");
        }
        if self.validators.is_some() {
            names.push("validators");
        }
        if self.did_ethr.is_some() {
            names.push("did_ethr");
        }
        if self.did_indy.is_some() {
            names.push("did_indy");
        }
        if self.schemas.is_some() {
            names.push("schemas");
        }
        if self.credential_definitions.is_some() {
            names.push("credential_definitions");
        }
        if self.legacy_mappings.is_some() {
            names.push("legacy_mappings");
        }
        names
    }

    pub fn contract_count(&self) -> usize {
        self.configured_contracts().len()
    }
}

fn validate_section(table_name: &str, section: &impl ContractConfig) -> Result<()> {
    validation::validate_non_empty_string(&format!("{}.name", table_name), section.name())?;
    validation::validate_address(&format!("{}.address", table_name), section.address())?;
    validation::validate_non_empty_string(
        &format!("{}.description", table_name),
        section.description(),
    )?;
    Ok(())
}

impl Validate for GenesisConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
