//! # Core Library
//!
//! Wallet connection logic shared by the web page and its tests.
//!
//! - [`controller`] - The [`ConnectionController`](controller::ConnectionController) state machine
//! - [`state`] - Connection state, display view and diagnostics snapshot
//! - [`balance`] - Smallest-unit to display-unit formatting
//! - [`network`] - Chain id comparison and known network names
//! - [`provider`], [`display`], [`timer`] - Seams to the injected wallet, the DOM and the clock
//! - [`config`] - Compiled-in network configuration
//! - [`error`] - Error taxonomy

pub mod balance;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod network;
pub mod provider;
pub mod state;
pub mod timer;

pub use controller::ConnectionController;
pub use error::{ConnectError, Result};
pub use state::{ConnectionState, ConnectionStatus, ConnectionView};
