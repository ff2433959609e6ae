//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the injected wallet provider.
//!
//! ## Module Organization
//!
//! - [`rpc`] - `request()` envelopes and the method names the page uses
//! - [`provider`] - Provider error objects and connect info
//! - [`event`] - Events the provider emits (`accountsChanged`, `chainChanged`, ...)
//!
//! ## Example Exchange
//!
//! ```text
//! provider.request({ "method": "eth_chainId" })
//!   -> "0xa869"
//!
//! provider.request({ "method": "eth_requestAccounts" })
//!   -> Err({ "code": 4001, "message": "User rejected the request." })
//! ```

pub mod event;
pub mod provider;
pub mod rpc;

pub use event::*;
pub use provider::*;
pub use rpc::*;
