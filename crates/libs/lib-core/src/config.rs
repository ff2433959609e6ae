//! # Network Configuration
//!
//! Static, compiled-in settings for the connection flow: which chain the page
//! targets, how balances are scaled and displayed, and UI timings.
//!
//! The defaults target the Avalanche Fuji testnet. A build can override the
//! chain through compile-time environment variables (see
//! [`NetworkConfig::from_build_env`]); nothing is read at runtime.
//!
//! ## Global Config Access
//!
//! ```rust
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().ok();
//! assert_eq!(core_config().native_decimals, 18);
//! ```

use std::sync::OnceLock;

use lib_utils::parse_chain_id;

use crate::error::{ConnectError, Result};

/// Avalanche Fuji testnet (43113)
pub const AVALANCHE_FUJI_CHAIN_ID: &str = "0xa869";
pub const AVALANCHE_FUJI_NAME: &str = "Avalanche Fuji Testnet";
pub const NATIVE_SYMBOL: &str = "AVAX";

/// Smallest unit to display unit exponent (wei -> AVAX)
pub const NATIVE_DECIMALS: u32 = 18;
/// Decimals shown in the balance display
pub const BALANCE_PRECISION: u32 = 4;

// UI timings
pub const ERROR_DISPLAY_MS: u32 = 5000;
pub const SETTLE_DELAY_MS: u32 = 500;

/// Largest exponent whose power of ten fits in a `u128`
const MAX_DECIMALS: u32 = 38;

/// Compiled-in connection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Chain the page expects the wallet to be on (hex quantity)
    pub target_chain_id: String,

    /// Display name of the target chain
    pub target_chain_name: String,

    /// Ticker of the native currency (logging and labels only)
    pub native_symbol: String,

    /// Power of ten between the smallest unit and the display unit
    pub native_decimals: u32,

    /// Decimal places in the balance display
    pub balance_precision: u32,

    /// How long a transient error stays visible
    pub error_display_ms: u32,

    /// Pause between account approval and the first chain/balance query
    ///
    /// Some wallets answer `eth_chainId` with stale data right after the
    /// approval prompt closes.
    pub settle_delay_ms: u32,

    /// Optional wall-clock limit on each provider call
    ///
    /// `None` leaves an unresponsive provider pending indefinitely.
    pub request_timeout_ms: Option<u32>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            target_chain_id: AVALANCHE_FUJI_CHAIN_ID.to_string(),
            target_chain_name: AVALANCHE_FUJI_NAME.to_string(),
            native_symbol: NATIVE_SYMBOL.to_string(),
            native_decimals: NATIVE_DECIMALS,
            balance_precision: BALANCE_PRECISION,
            error_display_ms: ERROR_DISPLAY_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
            request_timeout_ms: None,
        }
    }
}

impl NetworkConfig {
    /// Build the configuration from compile-time environment overrides.
    ///
    /// Recognized variables (all optional, read by `option_env!` at build time):
    /// `WALLET_TARGET_CHAIN_ID`, `WALLET_TARGET_CHAIN_NAME`,
    /// `WALLET_NATIVE_SYMBOL`, `WALLET_REQUEST_TIMEOUT_MS`.
    pub fn from_build_env() -> Result<Self> {
        Self::from_overrides(
            option_env!("WALLET_TARGET_CHAIN_ID"),
            option_env!("WALLET_TARGET_CHAIN_NAME"),
            option_env!("WALLET_NATIVE_SYMBOL"),
            option_env!("WALLET_REQUEST_TIMEOUT_MS"),
        )
    }

    fn from_overrides(
        chain_id: Option<&str>,
        chain_name: Option<&str>,
        symbol: Option<&str>,
        timeout_ms: Option<&str>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(chain_id) = chain_id {
            config.target_chain_id = chain_id.trim().to_lowercase();
        }
        if let Some(chain_name) = chain_name {
            config.target_chain_name = chain_name.trim().to_string();
        }
        if let Some(symbol) = symbol {
            config.native_symbol = symbol.trim().to_string();
        }
        if let Some(timeout_ms) = timeout_ms {
            let timeout_ms = timeout_ms.trim().parse::<u32>().map_err(|e| {
                ConnectError::Config(format!("WALLET_REQUEST_TIMEOUT_MS must be a valid number: {}", e))
            })?;
            config.request_timeout_ms = Some(timeout_ms).filter(|ms| *ms > 0);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the settings against what the formatter and controller can handle.
    pub fn validate(&self) -> Result<()> {
        parse_chain_id(&self.target_chain_id).map_err(|_| {
            ConnectError::Config(format!(
                "target chain id must be a hex or decimal quantity, got {:?}",
                self.target_chain_id
            ))
        })?;

        if self.target_chain_name.trim().is_empty() {
            return Err(ConnectError::Config("target chain name cannot be empty".to_string()));
        }

        if self.native_decimals > MAX_DECIMALS {
            return Err(ConnectError::Config(format!(
                "native decimals must be at most {}",
                MAX_DECIMALS
            )));
        }

        if self.balance_precision > self.native_decimals {
            return Err(ConnectError::Config(
                "balance precision cannot exceed native decimals".to_string(),
            ));
        }

        if self.error_display_ms == 0 {
            return Err(ConnectError::Config("error display duration must be positive".to_string()));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<NetworkConfig> = OnceLock::new();

/// Initialize the global configuration from the build environment.
///
/// # Errors
///
/// Returns an error if an override is invalid or the config was already
/// initialized.
pub fn init_config() -> Result<()> {
    let config = NetworkConfig::from_build_env()?;

    CONFIG
        .set(config)
        .map_err(|_| ConnectError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
///
/// Falls back to the Fuji defaults when [`init_config()`] was never called.
pub fn core_config() -> &'static NetworkConfig {
    CONFIG.get_or_init(NetworkConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = NetworkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_chain_id, "0xa869");
        assert_eq!(config.request_timeout_ms, None);
    }

    #[test]
    fn test_overrides() {
        let config =
            NetworkConfig::from_overrides(Some("0xA86A"), Some("Avalanche C-Chain"), None, Some("15000"))
                .unwrap();
        assert_eq!(config.target_chain_id, "0xa86a");
        assert_eq!(config.target_chain_name, "Avalanche C-Chain");
        assert_eq!(config.native_symbol, "AVAX");
        assert_eq!(config.request_timeout_ms, Some(15000));
    }

    #[test]
    fn test_zero_timeout_disables_limit() {
        let config = NetworkConfig::from_overrides(None, None, None, Some("0")).unwrap();
        assert_eq!(config.request_timeout_ms, None);
    }

    #[test]
    fn test_invalid_overrides() {
        assert!(NetworkConfig::from_overrides(Some("fuji"), None, None, None).is_err());
        assert!(NetworkConfig::from_overrides(None, Some("  "), None, None).is_err());
        assert!(NetworkConfig::from_overrides(None, None, None, Some("soon")).is_err());
    }

    #[test]
    fn test_precision_bounds() {
        let config = NetworkConfig {
            balance_precision: 19,
            ..NetworkConfig::default()
        };
        assert!(config.validate().is_err());

        let config = NetworkConfig {
            native_decimals: 40,
            balance_precision: 4,
            ..NetworkConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
