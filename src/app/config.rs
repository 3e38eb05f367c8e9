//! Configuration types for the application layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chain::{Address, ChainId};

/// Full description of the target chain, in the shape wallets expect when
/// asked to add a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainProfile {
    pub chain_id: ChainId,
    pub name: String,
    pub rpc_url: String,
    pub currency_symbol: String,
    pub currency_decimals: u8,
    pub explorer_url: String,
}

impl ChainProfile {
    /// The Status Network testnet the game settles on.
    pub fn status_testnet() -> Self {
        ChainProfile {
            chain_id: ChainId(0x6300_005A),
            name: "Status Network Testnet".to_string(),
            rpc_url: "https://public.sepolia.rpc.status.network".to_string(),
            currency_symbol: "ETH".to_string(),
            currency_decimals: 18,
            explorer_url: "https://sepoliascan.status.network".to_string(),
        }
    }
}

impl Default for ChainProfile {
    fn default() -> Self {
        Self::status_testnet()
    }
}

/// Tunables for a game session and its reward pipeline.
///
/// Defaults match the original deployment: a 500 ms thinking pause for the
/// opponent, a collectible after 3 consecutive wins, and the deployed
/// reward contract with its pinned metadata.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Display delay before the opponent's move is applied
    pub think_delay: Duration,
    /// Consecutive human wins required for the collectible
    pub streak_target: u32,
    /// Deployed reward-token contract
    pub collectible_contract: Address,
    /// Metadata URI passed to every mint
    pub metadata_uri: String,
}

impl GameConfig {
    pub fn new() -> Self {
        GameConfig {
            think_delay: Duration::from_millis(500),
            streak_target: 3,
            collectible_contract: Address::new("0xD02D9a513970F965AbCC683485c206a3F346d0CB"),
            metadata_uri: "ipfs://bafkreiekzaqbqlay3fvxk6tftzx55puilo6r5afe3dppkwdunowozd3ro4"
                .to_string(),
        }
    }

    /// Set the opponent's thinking pause.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Set the consecutive-win target for the collectible.
    pub fn with_streak_target(mut self, target: u32) -> Self {
        self.streak_target = target;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_testnet_profile() {
        let profile = ChainProfile::status_testnet();
        assert_eq!(profile.chain_id, ChainId(1_660_990_954));
        assert_eq!(profile.chain_id.to_string(), "0x6300005A");
        assert_eq!(profile.currency_decimals, 18);
    }

    #[test]
    fn test_game_config_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.think_delay, Duration::from_millis(500));
        assert_eq!(config.streak_target, 3);
        assert_eq!(config.collectible_contract.short(), "0xD02D…d0CB");
        assert!(config.metadata_uri.starts_with("ipfs://"));
    }

    #[test]
    fn test_game_config_builders() {
        let config = GameConfig::new()
            .with_think_delay(Duration::ZERO)
            .with_streak_target(5);
        assert_eq!(config.think_delay, Duration::ZERO);
        assert_eq!(config.streak_target, 5);
    }
}
