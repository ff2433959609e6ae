use serde::{Deserialize, Serialize};
use std::fmt;

/// EIP-1193 code for "the user rejected the request"
pub const USER_REJECTED_CODE: i64 = 4001;

/// Error object a provider rejects a request with
///
/// Providers are inconsistent about the shape: most send `{ code, message }`,
/// some throw a bare string. `code` is therefore optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// Error without a numeric code (thrown strings, interop failures)
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn user_rejected(&self) -> bool {
        self.code == Some(USER_REJECTED_CODE)
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Payload of the provider `connect` event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectInfo {
    pub chain_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rejection_code() {
        assert!(ProviderError::new(4001, "User rejected the request.").user_rejected());
        assert!(!ProviderError::new(-32603, "Internal error").user_rejected());
        assert!(!ProviderError::message("boom").user_rejected());
    }

    #[test]
    fn test_decode_error_object() {
        let err: ProviderError =
            serde_json::from_str(r#"{"code":4001,"message":"User rejected the request."}"#).unwrap();
        assert_eq!(err, ProviderError::new(4001, "User rejected the request."));

        let bare: ProviderError = serde_json::from_str(r#"{"message":"oops"}"#).unwrap();
        assert_eq!(bare.code, None);
    }

    #[test]
    fn test_connect_info_camel_case() {
        let info: ConnectInfo = serde_json::from_str(r#"{"chainId":"0xa869"}"#).unwrap();
        assert_eq!(info.chain_id, "0xa869");
    }
}
