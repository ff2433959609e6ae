//! # Shared Utility Functions
//!
//! Common utility functions used by the controller and the web page.
//!
//! ## Address Formatting
//!
//! Functions for formatting account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`shorten_address`] - `format_address` with the EVM defaults (`0x` + 4 hex chars, last 4)
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x8ba1f109551bD432803012645Ac136ddd64DBA72";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x8ba1...BA72");
//! ```

/// Characters kept at the start of a shortened address (`0x` plus four hex digits)
pub const SHORT_ADDRESS_PREFIX: usize = 6;
/// Characters kept at the end of a shortened address
pub const SHORT_ADDRESS_SUFFIX: usize = 4;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Arguments
///
/// * `address` - The wallet address to format
/// * `prefix_len` - Number of characters to show at the start
/// * `suffix_len` - Number of characters to show at the end
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x8ba1f109551bD432803012645Ac136ddd64DBA72";
/// assert_eq!(format_address(addr, 6, 4), "0x8ba1...BA72");
/// assert_eq!(format_address(addr, 4, 4), "0x8b...BA72");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Also guard against individual lengths exceeding address length to prevent panics
    if address_len < prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    // Hex addresses are ASCII-only, so byte indexing is safe here
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Shorten an EVM address for display (`0x1234...abcd`).
///
/// # Examples
///
/// ```rust
/// use shared::utils::shorten_address;
///
/// let addr = "0x8ba1f109551bD432803012645Ac136ddd64DBA72";
/// assert_eq!(shorten_address(addr), "0x8ba1...BA72");
/// ```
pub fn shorten_address(address: &str) -> String {
    format_address(address, SHORT_ADDRESS_PREFIX, SHORT_ADDRESS_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x8ba1f109551bD432803012645Ac136ddd64DBA72";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 6, 4), "0x8ba1...BA72");
        assert_eq!(format_address(ADDR, 6, 6), "0x8ba1...4DBA72");
        assert_eq!(format_address(ADDR, 2, 2), "0x...72");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("0x1234567", 6, 4), "0x1234567");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(shorten_address(ADDR), "0x8ba1...BA72");
        // exactly prefix + suffix characters is still shortened
        assert_eq!(shorten_address("0x12345678"), "0x1234...5678");
    }
}
