//! Chain identifiers and per-chain address format checks.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Chain {
    #[serde(rename = "ERC20")]
    Erc20,
    #[serde(rename = "TRC20")]
    Trc20,
    #[serde(rename = "BEP20")]
    Bep20,
    #[serde(rename = "BEP2")]
    Bep2,
    #[serde(rename = "SOL")]
    Sol,
    #[serde(rename = "BTC")]
    Btc,
}

impl Chain {
    pub const ALL: [Chain; 6] = [
        Chain::Erc20,
        Chain::Trc20,
        Chain::Bep20,
        Chain::Bep2,
        Chain::Sol,
        Chain::Btc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Erc20 => "ERC20",
            Chain::Trc20 => "TRC20",
            Chain::Bep20 => "BEP20",
            Chain::Bep2 => "BEP2",
            Chain::Sol => "SOL",
            Chain::Btc => "BTC",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported chain: {0}")]
pub struct UnsupportedChain(pub String);

impl FromStr for Chain {
    type Err = UnsupportedChain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Chain::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnsupportedChain(s.trim().to_string()))
    }
}

// Chains missing from this table accept any address.
static ADDRESS_PATTERNS: Lazy<HashMap<Chain, Regex>> = Lazy::new(|| {
    let evm = r"^0x[a-fA-F0-9]{40}$";
    [
        (Chain::Erc20, evm),
        (Chain::Bep20, evm),
        (Chain::Trc20, r"^T[a-zA-Z0-9]{33}$"),
    ]
    .into_iter()
    .map(|(chain, pattern)| (chain, Regex::new(pattern).expect("static address pattern")))
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressCheck {
    Valid,
    InvalidFormat,
}

/// Checks `address` against the chain's registered pattern.
pub fn validate_address(chain: Chain, address: &str) -> AddressCheck {
    match ADDRESS_PATTERNS.get(&chain) {
        Some(re) if !re.is_match(address) => AddressCheck::InvalidFormat,
        _ => AddressCheck::Valid,
    }
}

#[cfg(test)]
fn has_pattern(chain: Chain) -> bool {
    ADDRESS_PATTERNS.contains_key(&chain)
}
