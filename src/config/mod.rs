pub mod genesis;

pub use genesis::{
    CredentialDefinitionsConfig, DidEthrRegistryConfig, DidIndyRegistryConfig, GenesisConfig,
    LegacyMappingRegistryConfig, NetworkConfig, RoleControlConfig, SchemaRegistryConfig,
    ValidatorControlConfig,
};
