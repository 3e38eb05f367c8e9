//! Value types for the on-chain collaborators
//!
//! These are plain identifiers; all real wallet and transaction behavior
//! lives behind the traits in [`crate::ports`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// An account or contract address as a 0x-prefixed hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn new(hex: impl Into<String>) -> Self {
        Address(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated display form: first six and last four characters,
    /// the way the original UI renders a connected account.
    pub fn short(&self) -> String {
        if self.0.len() <= 10 {
            return self.0.clone();
        }
        format!("{}…{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An EVM chain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Wallets exchange chain ids in hex (e.g. 0x6300005A)
        write!(f, "0x{:X}", self.0)
    }
}

/// Handle for a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(String);

impl TxHash {
    pub fn new(hex: impl Into<String>) -> Self {
        TxHash(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated display form (first ten characters), matching the
    /// original status messages.
    pub fn short(&self) -> String {
        if self.0.len() <= 10 {
            return self.0.clone();
        }
        format!("{}…", &self.0[..10])
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Confirmation receipt for a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub hash: TxHash,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_short_form() {
        let addr = Address::new("0xD02D9a513970F965AbCC683485c206a3F346d0CB");
        assert_eq!(addr.short(), "0xD02D…d0CB");
    }

    #[test]
    fn test_address_short_form_small_input() {
        let addr = Address::new("0xabc");
        assert_eq!(addr.short(), "0xabc");
    }

    #[test]
    fn test_chain_id_hex_display() {
        assert_eq!(ChainId(1_660_990_954).to_string(), "0x6300005A");
        assert_eq!(ChainId(1).to_string(), "0x1");
    }

    #[test]
    fn test_tx_hash_short_form() {
        let hash = TxHash::new("0x0123456789abcdef0123456789abcdef");
        assert_eq!(hash.short(), "0x01234567…");
    }
}
