//! Chain identification helpers.

use lib_utils::parse_chain_id;

/// Networks a wallet is commonly left on, by numeric chain id
const KNOWN_NETWORKS: &[(u64, &str)] = &[
    (1, "Ethereum Mainnet"),
    (56, "BNB Smart Chain"),
    (137, "Polygon Mainnet"),
    (43114, "Avalanche Mainnet"),
    (43113, "Avalanche Fuji Testnet"),
];

pub const UNKNOWN_NETWORK: &str = "Unknown Network";

/// Display name for a chain id, if it is one we recognize.
pub fn known_network_name(chain_id: &str) -> Option<&'static str> {
    let id = parse_chain_id(chain_id).ok()?;
    KNOWN_NETWORKS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
}

/// Display name for a chain id, falling back to [`UNKNOWN_NETWORK`].
pub fn network_name(chain_id: &str) -> &'static str {
    known_network_name(chain_id).unwrap_or(UNKNOWN_NETWORK)
}

/// Compare two chain ids numerically (`0xA869 == 0xa869 == 43113`).
///
/// Ids that do not parse are compared as case-insensitive strings.
pub fn same_chain(a: &str, b: &str) -> bool {
    match (parse_chain_id(a), parse_chain_id(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.trim().eq_ignore_ascii_case(b.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_networks() {
        assert_eq!(known_network_name("0x1"), Some("Ethereum Mainnet"));
        assert_eq!(known_network_name("0x38"), Some("BNB Smart Chain"));
        assert_eq!(known_network_name("0x89"), Some("Polygon Mainnet"));
        assert_eq!(known_network_name("0xa86a"), Some("Avalanche Mainnet"));
        assert_eq!(known_network_name("0x5"), None);
        assert_eq!(network_name("0x5"), "Unknown Network");
        assert_eq!(network_name("garbage"), "Unknown Network");
    }

    #[test]
    fn test_same_chain() {
        assert!(same_chain("0xa869", "0xA869"));
        assert!(same_chain("0xa869", "43113"));
        assert!(!same_chain("0xa869", "0xa86a"));
        assert!(same_chain("custom-net", "CUSTOM-NET"));
    }
}
