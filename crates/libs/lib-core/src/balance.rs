//! # Native Balance Formatting
//!
//! Converts smallest-unit amounts reported by the provider (`eth_getBalance`
//! returns hex wei) into fixed-precision display strings.
//!
//! Amounts that fit in a `u128` are converted with integer arithmetic. Wider
//! amounts are scaled on their decimal digit string. Both paths are exact and
//! round half-up.
//!
//! ## Usage
//!
//! ```rust
//! use lib_core::balance::format_native_balance;
//!
//! assert_eq!(format_native_balance(Some("0xde0b6b3a7640000")).unwrap(), "1.0000");
//! assert_eq!(format_native_balance(None).unwrap(), "0.0000");
//! assert!(format_native_balance(Some("0xnope")).is_err());
//! ```

use lib_utils::quantity::{self, parse_quantity, parse_quantity_decimal};
use tracing::debug;

use crate::config::{BALANCE_PRECISION, NATIVE_DECIMALS};
use crate::error::{ConnectError, Result};

/// Display marker used when the balance could not be fetched or parsed
pub const BALANCE_ERROR_MARKER: &str = "Error";

/// Format a raw smallest-unit amount with the default exponent (18) and precision (4).
pub fn format_native_balance(raw: Option<&str>) -> Result<String> {
    format_native_amount(raw, NATIVE_DECIMALS, BALANCE_PRECISION)
}

/// Format a raw smallest-unit amount as a `precision`-decimal string.
///
/// `raw` is a `0x`-prefixed hex or plain decimal integer string. Absent, empty
/// and bare-`0x` input format as zero. Anything else that is not a
/// non-negative integer fails with [`ConnectError::MalformedAmount`].
pub fn format_native_amount(raw: Option<&str>, decimals: u32, precision: u32) -> Result<String> {
    if precision > decimals {
        return Err(ConnectError::InvalidInput(format!(
            "precision {} exceeds decimals {}",
            precision, decimals
        )));
    }

    let raw = match raw.map(str::trim) {
        None | Some("") | Some("0x") | Some("0X") => return Ok(zero(precision)),
        Some(raw) => raw,
    };

    debug!(raw, "formatting native balance");

    match parse_quantity(raw) {
        Ok(value) => format_exact(value, decimals, precision),
        Err(quantity::Error::Overflow(_)) => {
            let digits = parse_quantity_decimal(raw)?;
            debug!(raw, "amount exceeds u128, scaling digit string");
            Ok(format_digits(&digits, decimals, precision))
        }
        Err(err) => Err(ConnectError::from(err)),
    }
}

fn zero(precision: u32) -> String {
    render(0, 0, precision)
}

fn render(integer: u128, fraction: u128, precision: u32) -> String {
    if precision == 0 {
        integer.to_string()
    } else {
        format!("{}.{:0width$}", integer, fraction, width = precision as usize)
    }
}

fn format_exact(value: u128, decimals: u32, precision: u32) -> Result<String> {
    let scale = 10u128
        .checked_pow(decimals - precision)
        .ok_or_else(|| ConnectError::InvalidInput(format!("decimals {} out of range", decimals)))?;
    let display_unit = 10u128.pow(precision);

    let mut scaled = value / scale;
    let remainder = value % scale;
    // scale <= 10^38, so doubling the remainder cannot overflow
    if remainder * 2 >= scale && scale > 1 {
        scaled += 1;
    }

    Ok(render(scaled / display_unit, scaled % display_unit, precision))
}

/// Scale a decimal digit string by `10^decimals`, keeping `precision` digits.
fn format_digits(digits: &str, decimals: u32, precision: u32) -> String {
    let decimals = decimals as usize;
    let precision = precision as usize;

    // At least one integer digit
    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let kept_len = padded.len() - (decimals - precision);
    let mut kept: Vec<u8> = padded.as_bytes()[..kept_len].to_vec();

    if padded.as_bytes().get(kept_len).is_some_and(|d| *d >= b'5') {
        let mut carried = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carried = false;
                break;
            }
        }
        if carried {
            kept.insert(0, b'1');
        }
    }

    let text: String = kept.iter().map(|&b| b as char).collect();
    let (integer, fraction) = text.split_at(text.len() - precision);
    if precision == 0 {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}
