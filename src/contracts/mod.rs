pub mod credential_definitions;
pub mod did_ethr_registry;
pub mod did_indy_registry;
pub mod legacy_mapping_registry;
pub mod role_control;
pub mod schema_registry;
pub mod validator_control;

pub use credential_definitions::build_credential_definitions_section;
pub use did_ethr_registry::build_did_ethr_registry_section;
pub use did_indy_registry::build_did_indy_registry_section;
pub use legacy_mapping_registry::build_legacy_mapping_registry_section;
pub use role_control::build_role_control_section;
pub use schema_registry::build_schema_registry_section;
pub use validator_control::build_validator_control_section;
