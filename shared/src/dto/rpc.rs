use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prompt the user to authorize accounts for this page.
pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
/// Accounts already authorized for this page (never prompts).
pub const ETH_ACCOUNTS: &str = "eth_accounts";
/// Active chain identifier as a hex quantity.
pub const ETH_CHAIN_ID: &str = "eth_chainId";
/// Native balance of an address at a block tag.
pub const ETH_GET_BALANCE: &str = "eth_getBalance";

/// Block tag used for balance queries.
pub const BLOCK_LATEST: &str = "latest";

/// Argument object passed to `provider.request(...)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestArguments {
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Value>,
}

impl RequestArguments {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            params: Vec::new(),
        }
    }

    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = params;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_params_omits_field() {
        let json = serde_json::to_value(RequestArguments::new(ETH_CHAIN_ID)).unwrap();
        assert_eq!(json, serde_json::json!({ "method": "eth_chainId" }));
    }

    #[test]
    fn test_balance_request_shape() {
        let request = RequestArguments::new(ETH_GET_BALANCE)
            .with_params(vec!["0xabc".into(), BLOCK_LATEST.into()]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "method": "eth_getBalance", "params": ["0xabc", "latest"] })
        );
    }
}
