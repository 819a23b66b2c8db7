use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage payload of a genesis contract section, keyed by storage slot.
/// Ordered so serialized output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStorage(BTreeMap<String, String>);

impl ContractStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slot: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(slot.into(), value.into())
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// One named unit of genesis configuration describing a registry contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSection {
    pub name: String,
    pub address: String,
    pub description: String,
    pub storage: ContractStorage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDefinition {
    pub id: String,
    pub data: CredentialDefinitionData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDefinitionData {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub id: String,
    pub data: SchemaData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaData {
    pub name: String,
}

/// Links a legacy (pre-migration) DID to its ledger DID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidMapping {
    pub legacy_did: String,
    pub did: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: String,
    pub accounts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorInfo {
    pub account: String,
    pub validator: String,
}

/// Assembled output document: every configured section in deterministic
/// order, plus network identity and a generation timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct GenesisSections {
    pub network: String,
    pub chain_id: u64,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<ContractSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_starts_empty() {
        let storage = ContractStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn test_storage_insert_and_get() {
        let mut storage = ContractStorage::new();
        assert_eq!(storage.insert("0x0", "0x1"), None);
        assert_eq!(storage.get("0x0"), Some("0x1"));
        assert_eq!(storage.insert("0x0", "0x2"), Some("0x1".to_string()));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_storage_serializes_as_map() {
        let mut storage = ContractStorage::new();
        storage.insert("0x0", "0xff");
        let json = serde_json::to_value(&storage).unwrap();
        assert_eq!(json, serde_json::json!({"0x0": "0xff"}));
    }
}
