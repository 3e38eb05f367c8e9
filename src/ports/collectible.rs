//! Collectible-token port
//!
//! Boundary to the pre-deployed reward contract. The contract itself is an
//! external collaborator; only its mint entry point is consumed here.

use crate::{
    Result,
    chain::{Address, TxHash},
};

/// Port for the reward-token capability.
pub trait CollectibleMinter {
    /// Mint the collectible to `to` with the given metadata URI and return
    /// the mint transaction's handle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MintRejected`] when the contract call is
    /// refused.
    fn mint(&mut self, to: &Address, metadata_uri: &str) -> Result<TxHash>;
}
