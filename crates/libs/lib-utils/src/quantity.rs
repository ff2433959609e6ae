//! # Quantity Parsing
//!
//! Providers hand back integers as strings: `0x`-prefixed hex for JSON-RPC
//! quantities, plain decimal from some wallets. These helpers parse both.

use std::num::IntErrorKind;

/// A digit string split from its radix prefix.
fn split_radix(raw: &str) -> Result<(&str, u32), Error> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::Empty);
    }

    let (digits, radix) = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (raw, 10),
    };

    // from_str_radix tolerates a leading '+', providers never send one
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::InvalidDigits(raw.to_string()));
    }

    Ok((digits, radix))
}

/// Parse a hex (`0x...`) or decimal quantity into a `u128`.
///
/// `u128` holds any realistic smallest-unit balance; wider values report
/// [`Error::Overflow`] so callers can fall back to [`parse_quantity_decimal`].
pub fn parse_quantity(raw: &str) -> Result<u128, Error> {
    let (digits, radix) = split_radix(raw)?;
    u128::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => Error::Overflow(raw.trim().to_string()),
        _ => Error::InvalidDigits(raw.trim().to_string()),
    })
}

/// Decimal limbs, little-endian, for quantities wider than `u128`
const LIMB_BASE: u64 = 1_000_000_000;

/// Parse a quantity of any width into its exact decimal digit string.
///
/// No leading zeros; zero is `"0"`.
pub fn parse_quantity_decimal(raw: &str) -> Result<String, Error> {
    let (digits, radix) = split_radix(raw)?;

    if radix == 10 {
        let trimmed = digits.trim_start_matches('0');
        return Ok(if trimmed.is_empty() { "0" } else { trimmed }.to_string());
    }

    let mut limbs: Vec<u64> = vec![0];
    for c in digits.chars() {
        // validated by split_radix
        let mut carry = c.to_digit(radix).unwrap_or(0) as u64;
        for limb in limbs.iter_mut() {
            let value = *limb * radix as u64 + carry;
            *limb = value % LIMB_BASE;
            carry = value / LIMB_BASE;
        }
        while carry > 0 {
            limbs.push(carry % LIMB_BASE);
            carry /= LIMB_BASE;
        }
    }

    let mut out = String::with_capacity(limbs.len() * 9);
    let mut rest = limbs.iter().rev();
    if let Some(top) = rest.next() {
        out.push_str(&top.to_string());
    }
    for limb in rest {
        out.push_str(&format!("{:09}", limb));
    }
    Ok(out)
}

/// Parse a chain identifier (`0xa869` or `43113`).
pub fn parse_chain_id(raw: &str) -> Result<u64, Error> {
    let value = parse_quantity(raw)?;
    u64::try_from(value).map_err(|_| Error::Overflow(raw.trim().to_string()))
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Empty,
    InvalidDigits(String),
    Overflow(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_and_decimal() {
        assert_eq!(parse_quantity("0xde0b6b3a7640000"), Ok(1_000_000_000_000_000_000));
        assert_eq!(parse_quantity("0XFF"), Ok(255));
        assert_eq!(parse_quantity("1000"), Ok(1000));
        assert_eq!(parse_quantity("  0x10 "), Ok(16));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_quantity(""), Err(Error::Empty));
        assert!(matches!(parse_quantity("0x"), Err(Error::InvalidDigits(_))));
        assert!(matches!(parse_quantity("0xzz"), Err(Error::InvalidDigits(_))));
        assert!(matches!(parse_quantity("0x+1"), Err(Error::InvalidDigits(_))));
        assert!(matches!(parse_quantity("-5"), Err(Error::InvalidDigits(_))));
        assert!(matches!(parse_quantity("12abc"), Err(Error::InvalidDigits(_))));
    }

    #[test]
    fn test_parse_overflow() {
        let wide = format!("0x1{}", "0".repeat(32));
        assert!(matches!(parse_quantity(&wide), Err(Error::Overflow(_))));
        assert_eq!(
            parse_quantity_decimal(&wide).unwrap(),
            "340282366920938463463374607431768211456"
        );
    }

    #[test]
    fn test_parse_decimal_digits() {
        assert_eq!(parse_quantity_decimal("0x0"), Ok("0".to_string()));
        assert_eq!(parse_quantity_decimal("0x000ff"), Ok("255".to_string()));
        assert_eq!(parse_quantity_decimal("000120"), Ok("120".to_string()));
        assert_eq!(parse_quantity_decimal("0x3b9aca00"), Ok("1000000000".to_string()));
        assert!(matches!(parse_quantity_decimal("0xzz"), Err(Error::InvalidDigits(_))));

        let huge = parse_quantity_decimal(&format!("0x1{}", "0".repeat(260))).unwrap();
        assert!(huge.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(huge.len(), 314); // 16^260 = 2^1040 has 314 decimal digits
    }

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0xa869"), Ok(43113));
        assert_eq!(parse_chain_id("0xA869"), Ok(43113));
        assert_eq!(parse_chain_id("43113"), Ok(43113));
        assert!(parse_chain_id("avalanche").is_err());
    }
}
