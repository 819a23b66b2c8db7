use crate::utils::error::{GenesisError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Contract addresses are 0x-prefixed hex strings. Length is not enforced
/// here; short placeholder addresses are common in pre-deployment configs.
pub fn validate_address(field_name: &str, address: &str) -> Result<()> {
    let hex_part = match address.strip_prefix("0x") {
        Some(rest) => rest,
        None => {
            return Err(GenesisError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: address.to_string(),
                reason: "Address must start with '0x'".to_string(),
            })
        }
    };

    if hex_part.is_empty() {
        return Err(GenesisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Address has no hex digits after '0x'".to_string(),
        });
    }

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(GenesisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Address contains non-hex characters".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GenesisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(GenesisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GenesisError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_address() {
        assert!(validate_address("address", "0x0000000000000000000000000000000000003333").is_ok());
        assert!(validate_address("address", "0xABC").is_ok());
        assert!(validate_address("address", "0x").is_err());
        assert!(validate_address("address", "3333").is_err());
        assert!(validate_address("address", "0xZZZ").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "CredentialDefinitionRegistry").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("chain_id", 1337, 1).is_ok());
        assert!(validate_positive_number("chain_id", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("value".to_string());
        let absent: Option<String> = None;
        assert!(validate_required_field("field", &present).is_ok());
        assert!(validate_required_field("field", &absent).is_err());
    }
}
