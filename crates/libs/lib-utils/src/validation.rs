//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate an EVM address shape (`0x` followed by 40 hex digits).
pub fn validate_hex_address(address: &str) -> Result<(), String> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| "Address must start with 0x".to_string())?;

    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Address must be 40 hex digits".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("0xabc", "address").is_ok());
        assert_eq!(
            validate_not_empty("   ", "address"),
            Err("address cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_hex_address() {
        assert!(validate_hex_address("0x8ba1f109551bD432803012645Ac136ddd64DBA72").is_ok());
        assert!(validate_hex_address("8ba1f109551bD432803012645Ac136ddd64DBA72").is_err());
        assert!(validate_hex_address("0x1234").is_err());
    }
}
