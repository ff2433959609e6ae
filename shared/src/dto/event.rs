use serde::{Deserialize, Serialize};

use super::provider::{ConnectInfo, ProviderError};

/// Provider event names, as passed to `provider.on(name, handler)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProviderEventKind {
    AccountsChanged,
    ChainChanged,
    Connect,
    Disconnect,
}

impl ProviderEventKind {
    pub const ALL: [ProviderEventKind; 4] = [
        ProviderEventKind::AccountsChanged,
        ProviderEventKind::ChainChanged,
        ProviderEventKind::Connect,
        ProviderEventKind::Disconnect,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProviderEventKind::AccountsChanged => "accountsChanged",
            ProviderEventKind::ChainChanged => "chainChanged",
            ProviderEventKind::Connect => "connect",
            ProviderEventKind::Disconnect => "disconnect",
        }
    }
}

/// A decoded provider event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    AccountsChanged(Vec<String>),
    ChainChanged(String),
    Connect(ConnectInfo),
    Disconnect(ProviderError),
}

impl ProviderEvent {
    pub fn kind(&self) -> ProviderEventKind {
        match self {
            ProviderEvent::AccountsChanged(_) => ProviderEventKind::AccountsChanged,
            ProviderEvent::ChainChanged(_) => ProviderEventKind::ChainChanged,
            ProviderEvent::Connect(_) => ProviderEventKind::Connect,
            ProviderEvent::Disconnect(_) => ProviderEventKind::Disconnect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_match_eip1193() {
        let names: Vec<_> = ProviderEventKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["accountsChanged", "chainChanged", "connect", "disconnect"]);
    }

    #[test]
    fn test_event_kind() {
        let event = ProviderEvent::ChainChanged("0x1".to_string());
        assert_eq!(event.kind(), ProviderEventKind::ChainChanged);
    }
}
