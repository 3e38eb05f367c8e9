//! In-memory wallet for tests and the CLI driver.
//!
//! Fully scriptable: rejection flags and the known-chain set let tests
//! drive every branch of the connect flow without a real provider.

use crate::{
    Error, Result,
    app::config::ChainProfile,
    chain::{Address, ChainId},
    ports::WalletGateway,
};

/// Wallet gateway backed by plain fields.
#[derive(Debug, Clone)]
pub struct InMemoryWallet {
    address: Address,
    current_chain: ChainId,
    known_chains: Vec<ChainId>,
    connected: bool,
    reject_connection: bool,
    reject_switch: bool,
    reject_add: bool,
}

impl InMemoryWallet {
    /// A wallet holding `address`, currently parked on `chain` (which it
    /// knows about).
    pub fn new(address: Address, chain: ChainId) -> Self {
        InMemoryWallet {
            address,
            current_chain: chain,
            known_chains: vec![chain],
            connected: false,
            reject_connection: false,
            reject_switch: false,
            reject_add: false,
        }
    }

    /// Pre-register an additional chain, as if the user added it earlier.
    pub fn with_known_chain(mut self, chain: ChainId) -> Self {
        self.known_chains.push(chain);
        self
    }

    /// Decline the account-access prompt.
    pub fn rejecting_connection(mut self) -> Self {
        self.reject_connection = true;
        self
    }

    /// Decline any switch prompt.
    pub fn rejecting_switch(mut self) -> Self {
        self.reject_switch = true;
        self
    }

    /// Decline any add-chain prompt.
    pub fn rejecting_add(mut self) -> Self {
        self.reject_add = true;
        self
    }

    /// The chain the wallet currently reports.
    pub fn current_chain(&self) -> ChainId {
        self.current_chain
    }
}

impl WalletGateway for InMemoryWallet {
    fn request_accounts(&mut self) -> Result<Address> {
        if self.reject_connection {
            return Err(Error::ConnectionRejected);
        }
        self.connected = true;
        Ok(self.address.clone())
    }

    fn chain_id(&mut self) -> Result<ChainId> {
        if !self.connected {
            return Err(Error::WalletUnavailable);
        }
        Ok(self.current_chain)
    }

    fn switch_chain(&mut self, chain: ChainId) -> Result<()> {
        if self.reject_switch {
            return Err(Error::SwitchRejected { chain_id: chain });
        }
        if !self.known_chains.contains(&chain) {
            return Err(Error::UnknownChain { chain_id: chain });
        }
        self.current_chain = chain;
        Ok(())
    }

    fn add_chain(&mut self, profile: &ChainProfile) -> Result<()> {
        if self.reject_add {
            return Err(Error::AddChainFailed {
                chain_id: profile.chain_id,
                message: "user declined".to_string(),
            });
        }
        if !self.known_chains.contains(&profile.chain_id) {
            self.known_chains.push(profile.chain_id);
        }
        // Adding a chain also switches to it
        self.current_chain = profile.chain_id;
        Ok(())
    }

    fn address(&self) -> Result<Address> {
        if !self.connected {
            return Err(Error::WalletUnavailable);
        }
        Ok(self.address.clone())
    }
}
