//! Wallet port
//!
//! Boundary to the user's wallet provider: account access, chain
//! inspection, and chain switching. The negotiation sequence built on top
//! of these primitives lives in [`crate::app::connect`].

use crate::{
    Result,
    app::config::ChainProfile,
    chain::{Address, ChainId},
};

/// Port for the wallet provider capability.
///
/// Mirrors the provider request surface the original front-end relies on:
/// account access, chain id lookup, and the switch/add pair used for
/// network negotiation.
pub trait WalletGateway {
    /// Prompt the user for account access and return the selected address.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::WalletUnavailable`] when no provider is present
    /// - [`crate::Error::ConnectionRejected`] when the user declines
    fn request_accounts(&mut self) -> Result<Address>;

    /// The chain the wallet is currently on.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WalletUnavailable`] when not connected.
    fn chain_id(&mut self) -> Result<ChainId>;

    /// Ask the wallet to switch to `chain`.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::UnknownChain`] when the wallet has never seen the
    ///   chain (callers fall back to [`WalletGateway::add_chain`])
    /// - [`crate::Error::SwitchRejected`] when the user declines
    fn switch_chain(&mut self, chain: ChainId) -> Result<()>;

    /// Register a chain with the wallet from its full profile. A
    /// successful add also switches to the chain, as wallets do.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AddChainFailed`] when the wallet refuses.
    fn add_chain(&mut self, profile: &ChainProfile) -> Result<()>;

    /// The connected account's address.
    ///
    /// Re-read after any network change; the account can change under a
    /// switch.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WalletUnavailable`] when not connected.
    fn address(&self) -> Result<Address>;
}
