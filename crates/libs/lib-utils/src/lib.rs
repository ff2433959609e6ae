//! # Utilities Library
//!
//! Shared utility functions for provider quantity parsing and input validation.

pub mod quantity;
pub mod validation;

// Re-export commonly used functions
pub use quantity::{parse_chain_id, parse_quantity, parse_quantity_decimal};
pub use validation::{validate_hex_address, validate_not_empty};
