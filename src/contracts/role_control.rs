use crate::config::GenesisConfig;
use crate::core::section::build_section_from;
use crate::domain::model::ContractSection;
use crate::utils::error::{GenesisError, Result};

/// Build the genesis section for the role control contract. Role
/// assignments listed under `roles.data` are parsed but not materialized
/// into storage.
pub fn build_role_control_section(config: &GenesisConfig) -> Result<ContractSection> {
    let section = config
        .roles
        .as_ref()
        .ok_or_else(|| GenesisError::MissingConfigError {
            field: "roles".to_string(),
        })?;

    if !section.data.roles.is_empty() {
        tracing::warn!(
            count = section.data.roles.len(),
            "roles.data lists role assignments that will not be materialized into storage"
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

[roles]
name = "RoleControl"
address = "0x0000000000000000000000000000000000007777"
description = "Account role assignments"

[[roles.data.roles]]
role = "TRUSTEE"
accounts = ["0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"]
"#,
        )
        .unwrap();

        let section = build_role_control_section(&config).unwrap();
        assert_eq!(section.name, "RoleControl");
        assert!(section.storage.is_empty());
    }
}
