//! # Connection Error Handling
//!
//! This module defines [`ConnectError`], the single error type used by the
//! connection controller and its helpers. It follows the `thiserror` pattern.
//!
//! ## Error Categories
//!
//! 1. **Fatal to the attempt** - the user has to act outside the page
//!    - [`ProviderUnavailable`](ConnectError::ProviderUnavailable)
//!
//! 2. **Expected / recoverable** - the state machine reverts and the user may retry
//!    - [`UserRejected`](ConnectError::UserRejected)
//!    - [`NoAccounts`](ConnectError::NoAccounts)
//!    - [`ConnectionError`](ConnectError::ConnectionError)
//!    - [`ProviderTimeout`](ConnectError::ProviderTimeout)
//!
//! 3. **Display states** - not failures of the controller
//!    - [`WrongNetworkDetected`](ConnectError::WrongNetworkDetected)
//!    - [`BalanceFetchFailed`](ConnectError::BalanceFetchFailed)
//!
//! 4. **Internal** - converted before they reach the user
//!    - [`MalformedAmount`](ConnectError::MalformedAmount)
//!    - [`InvalidInput`](ConnectError::InvalidInput)
//!    - [`Config`](ConnectError::Config)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{ConnectError, Result};
//! use shared::dto::provider::ProviderError;
//!
//! fn classify(err: ProviderError) -> Result<()> {
//!     Err(ConnectError::from_provider(err))
//! }
//!
//! let err = classify(ProviderError::new(4001, "User rejected the request.")).unwrap_err();
//! assert!(matches!(err, ConnectError::UserRejected));
//! assert_eq!(err.user_message(), "Connection rejected by user");
//! ```

use shared::dto::provider::ProviderError;
use thiserror::Error;

/// Convenience type alias for `Result<T, ConnectError>`.
pub type Result<T> = std::result::Result<T, ConnectError>;

/// Every way a connection attempt or refresh can go wrong.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectError {
    /// No injected provider on the page.
    #[error("Wallet provider not detected")]
    ProviderUnavailable,

    /// The user dismissed the account access prompt (EIP-1193 code 4001).
    #[error("Connection rejected by user")]
    UserRejected,

    /// Account access succeeded but the provider returned no accounts.
    #[error("No accounts found")]
    NoAccounts,

    /// Any other provider failure.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The provider is on a chain other than the configured target.
    #[error("Wrong network {chain_id}: connected to {network}")]
    WrongNetworkDetected { chain_id: String, network: String },

    /// The balance query failed; the connection itself is still valid.
    #[error("Balance fetch failed: {0}")]
    BalanceFetchFailed(String),

    /// A provider quantity could not be parsed.
    #[error("Malformed amount: {0}")]
    MalformedAmount(String),

    /// A provider call did not settle within the configured timeout.
    #[error("Provider did not respond within {0} ms")]
    ProviderTimeout(u32),

    /// A precondition on an argument was violated.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Compiled-in configuration is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConnectError {
    /// Classify a provider rejection.
    pub fn from_provider(err: ProviderError) -> Self {
        if err.user_rejected() {
            ConnectError::UserRejected
        } else {
            ConnectError::ConnectionError(err.message)
        }
    }

    /// Whether the error ends the attempt until the user fixes something outside the page.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConnectError::ProviderUnavailable | ConnectError::Config(_))
    }

    /// Text for the transient error display.
    pub fn user_message(&self) -> String {
        match self {
            ConnectError::ProviderUnavailable => {
                "Wallet provider not detected. Please install a compatible wallet extension.".to_string()
            }
            ConnectError::UserRejected => "Connection rejected by user".to_string(),
            ConnectError::NoAccounts => "No accounts found".to_string(),
            ConnectError::ConnectionError(msg) => format!("Failed to connect wallet: {}", msg),
            ConnectError::WrongNetworkDetected { network, .. } => format!("Connected to {}", network),
            ConnectError::BalanceFetchFailed(msg) => format!("Failed to fetch balance: {}", msg),
            ConnectError::ProviderTimeout(_) => "Wallet did not respond. Please try again.".to_string(),
            ConnectError::MalformedAmount(_) | ConnectError::InvalidInput(_) | ConnectError::Config(_) => {
                "An internal error occurred".to_string()
            }
        }
    }
}

impl From<lib_utils::quantity::Error> for ConnectError {
    fn from(err: lib_utils::quantity::Error) -> Self {
        ConnectError::MalformedAmount(err.to_string())
    }
}
