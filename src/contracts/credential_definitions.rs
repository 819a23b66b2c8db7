use crate::config::GenesisConfig;
use crate::core::section::build_section_from;
use crate::domain::model::ContractSection;
use crate::utils::error::{GenesisError, Result};

/// Build the genesis section for the credential definition registry.
///
/// The section carries the configured name, address and description with an
/// empty storage payload. Credential definitions listed under
/// `credential_definitions.data` are parsed but not materialized into
/// storage; storage population happens in a later deployment step.
pub fn build_credential_definitions_section(config: &GenesisConfig) -> Result<ContractSection> {
    let section = config.credential_definitions.as_ref().ok_or_else(|| {
        GenesisError::MissingConfigError {
            field: "credential_definitions".to_string(),
        }
    })?;

    if !section.data.definitions.is_empty() {
        tracing::warn!(
            count = section.data.definitions.len(),
            "credential_definitions.data lists definitions that will not be materialized into storage"
        );
    }

    Ok(build_section_from(section))
}
