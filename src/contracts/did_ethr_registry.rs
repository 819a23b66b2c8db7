use crate::config::GenesisConfig;
use crate::core::section::build_section_from;
use crate::domain::model::ContractSection;
use crate::utils::error::{GenesisError, Result};

pub fn build_did_ethr_registry_section(config: &GenesisConfig) -> Result<ContractSection> {
    let section = config
        .did_ethr
        .as_ref()
        .ok_or_else(|| GenesisError::MissingConfigError {
            field: "did_ethr".to_string(),
        })?;

    Ok(build_section_from(section))
}
