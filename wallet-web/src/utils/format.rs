//! # Formatting Utilities for Wallet Web
//!
//! Display helpers on top of [`lib_core::ConnectionView`]. Address
//! shortening lives in [`shared::utils::shorten_address`].

use lib_core::balance::BALANCE_ERROR_MARKER;
use lib_core::state::PLACEHOLDER;

/// Append the native symbol to a formatted balance.
///
/// Placeholders and the error marker are shown as they are.
pub fn balance_label(balance_text: &str, symbol: &str) -> String {
    if balance_text == PLACEHOLDER || balance_text == BALANCE_ERROR_MARKER {
        balance_text.to_string()
    } else {
        format!("{} {}", balance_text, symbol)
    }
}

/// CSS class for a status badge
pub fn status_class(status: lib_core::ConnectionStatus) -> &'static str {
    use lib_core::ConnectionStatus::*;
    match status {
        Connected => "status connected",
        Connecting => "status connecting",
        WrongNetwork | Failed => "status error",
        Disconnected => "status",
    }
}
