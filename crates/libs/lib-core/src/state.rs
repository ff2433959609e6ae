//! # Connection State
//!
//! The single record describing what the page knows about the wallet, plus
//! the derived views handed to the display surface.
//!
//! Invariants maintained by the controller:
//! - `balance` is `Some` exactly when `status == Connected`
//! - `address`, `chain_id` and `balance` are all `None` when `Disconnected`

use serde::{Deserialize, Serialize};
use shared::utils::shorten_address;

use crate::balance::BALANCE_ERROR_MARKER;
use crate::config::NetworkConfig;

/// Placeholder for absent fields in the display
pub const PLACEHOLDER: &str = "-";

/// Connection status of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    WrongNetwork,
    /// Display-only; the controller reverts to `Disconnected` right after.
    Failed,
}

impl ConnectionStatus {
    /// Whether the user-facing connect action is available
    pub fn allows_connect(&self) -> bool {
        matches!(self, ConnectionStatus::Disconnected | ConnectionStatus::Failed)
    }
}

/// Balance as held in state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Balance {
    /// Formatted display amount
    Amount(String),
    /// Fetch or parse failed; shown as an error marker
    Unavailable,
}

impl Balance {
    pub fn display(&self) -> &str {
        match self {
            Balance::Amount(amount) => amount,
            Balance::Unavailable => BALANCE_ERROR_MARKER,
        }
    }
}

/// Everything the page knows about the wallet connection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    pub address: Option<String>,
    pub chain_id: Option<String>,
    pub balance: Option<Balance>,
    pub last_error: Option<String>,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Back to the initial state, keeping only an informational message.
    pub fn reset(&mut self, message: Option<String>) {
        *self = ConnectionState {
            last_error: message,
            ..ConnectionState::default()
        };
    }
}

/// What the display surface renders
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectionView {
    pub status: ConnectionStatus,
    pub status_text: String,
    pub short_address: String,
    pub full_address: Option<String>,
    pub network_name: String,
    pub balance_text: String,
    pub action_enabled: bool,
    pub action_label: String,
}

impl ConnectionView {
    pub fn from_state(state: &ConnectionState, config: &NetworkConfig) -> Self {
        let status_text = match state.status {
            ConnectionStatus::Disconnected => "Not Connected".to_string(),
            ConnectionStatus::Connecting => "Connecting...".to_string(),
            ConnectionStatus::Connected => "Connected".to_string(),
            ConnectionStatus::WrongNetwork => format!("Please switch to {}", config.target_chain_name),
            ConnectionStatus::Failed => "Connection Failed".to_string(),
        };

        let network_name = match (state.status, state.chain_id.as_deref()) {
            (ConnectionStatus::Connected, _) => config.target_chain_name.clone(),
            (ConnectionStatus::WrongNetwork, Some(chain_id)) => format!("Wrong Network ({})", chain_id),
            _ => PLACEHOLDER.to_string(),
        };

        let action_enabled = state.status.allows_connect();

        Self {
            status: state.status,
            status_text,
            short_address: state
                .address
                .as_deref()
                .map(shorten_address)
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            full_address: state.address.clone(),
            network_name,
            balance_text: state
                .balance
                .as_ref()
                .map(|b| b.display().to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            action_enabled,
            action_label: if action_enabled { "Connect Wallet" } else { "Connected" }.to_string(),
        }
    }
}

/// Snapshot for the diagnostics page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDiagnostics {
    pub status: ConnectionStatus,
    pub address: Option<String>,
    pub chain_id: Option<String>,
    pub balance: Option<String>,
    pub last_error: Option<String>,
    pub provider_present: bool,
    pub target_chain_id: String,
    pub generation: u64,
}

impl ConnectionDiagnostics {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x8ba1f109551bD432803012645Ac136ddd64DBA72";

    #[test]
    fn test_disconnected_view() {
        let view = ConnectionView::from_state(&ConnectionState::default(), &NetworkConfig::default());
        assert_eq!(view.status_text, "Not Connected");
        assert_eq!(view.short_address, "-");
        assert_eq!(view.network_name, "-");
        assert_eq!(view.balance_text, "-");
        assert!(view.action_enabled);
        assert_eq!(view.action_label, "Connect Wallet");
    }

    #[test]
    fn test_connected_view() {
        let state = ConnectionState {
            status: ConnectionStatus::Connected,
            address: Some(ADDR.to_string()),
            chain_id: Some("0xa869".to_string()),
            balance: Some(Balance::Amount("1.0000".to_string())),
            last_error: None,
        };
        let view = ConnectionView::from_state(&state, &NetworkConfig::default());
        assert_eq!(view.short_address, "0x8ba1...BA72");
        assert_eq!(view.full_address.as_deref(), Some(ADDR));
        assert_eq!(view.network_name, "Avalanche Fuji Testnet");
        assert_eq!(view.balance_text, "1.0000");
        assert!(!view.action_enabled);
        assert_eq!(view.action_label, "Connected");
    }

    #[test]
    fn test_wrong_network_view() {
        let state = ConnectionState {
            status: ConnectionStatus::WrongNetwork,
            address: Some(ADDR.to_string()),
            chain_id: Some("0x1".to_string()),
            balance: None,
            last_error: Some("Connected to Ethereum Mainnet".to_string()),
        };
        let view = ConnectionView::from_state(&state, &NetworkConfig::default());
        assert_eq!(view.status_text, "Please switch to Avalanche Fuji Testnet");
        assert_eq!(view.network_name, "Wrong Network (0x1)");
        assert_eq!(view.balance_text, "-");
        assert!(!view.action_enabled);
    }

    #[test]
    fn test_balance_error_marker() {
        assert_eq!(Balance::Unavailable.display(), "Error");
    }

    #[test]
    fn test_reset_keeps_message_only() {
        let mut state = ConnectionState {
            status: ConnectionStatus::Connected,
            address: Some(ADDR.to_string()),
            chain_id: Some("0xa869".to_string()),
            balance: Some(Balance::Amount("1.0000".to_string())),
            last_error: None,
        };
        state.reset(Some("Wallet disconnected".to_string()));
        assert_eq!(state.status, ConnectionStatus::Disconnected);
        assert_eq!(state.address, None);
        assert_eq!(state.chain_id, None);
        assert_eq!(state.balance, None);
        assert_eq!(state.last_error.as_deref(), Some("Wallet disconnected"));
    }
}
