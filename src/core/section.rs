use crate::domain::model::{ContractSection, ContractStorage};
use crate::domain::ports::ContractConfig;

/// Build one genesis section from its static fields and storage payload.
/// Pure constructor: fields are forwarded verbatim, nothing is cached,
/// every call produces a fresh descriptor.
pub fn build_section(
    name: &str,
    address: &str,
    description: &str,
    storage: ContractStorage,
) -> ContractSection {
    ContractSection {
        name: name.to_string(),
        address: address.to_string(),
        description: description.to_string(),
        storage,
    }
}

/// Build a section for a contract config table, with empty storage.
pub fn build_section_from<C: ContractConfig>(config: &C) -> ContractSection {
    build_section(
        config.name(),
        config.address(),
        config.description(),
        ContractStorage::new(),
    )
}
