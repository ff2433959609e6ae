//! # Shared Provider Types Library
//!
//! This library defines the contract between the page and the injected wallet
//! provider (EIP-1193). Both the runtime-agnostic controller in `lib-core` and the
//! browser bindings in `wallet-web` speak these types.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data exchanged with the provider
//!   - **[`dto::rpc`]**: Request envelopes and method names
//!   - **[`dto::provider`]**: Provider errors and connect info
//!   - **[`dto::event`]**: Provider-emitted events
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format account addresses for display
//!   - **[`utils::shorten_address`]**: Shorten an EVM address with ellipsis
//!
//! ## Wire Format
//!
//! Provider payloads arrive as plain JS objects and are decoded with `serde`:
//! - Request envelopes serialize as `{ "method": ..., "params": [...] }`
//! - `params` is omitted when empty
//! - Error objects keep the numeric EIP-1193 `code` when one is present
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::rpc::{RequestArguments, ETH_GET_BALANCE};
//! use shared::utils::shorten_address;
//!
//! let address = "0x8ba1f109551bD432803012645Ac136ddd64DBA72";
//! let request = RequestArguments::new(ETH_GET_BALANCE)
//!     .with_params(vec![address.into(), "latest".into()]);
//!
//! assert_eq!(request.method, "eth_getBalance");
//! assert_eq!(shorten_address(address), "0x8ba1...BA72");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
