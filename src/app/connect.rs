//! Wallet connection and network negotiation.
//!
//! The sequence mirrors what wallets actually require: request accounts,
//! check the chain, try to switch, fall back to adding the chain when the
//! wallet has never seen it, then re-verify — a switch prompt can be
//! accepted and still land on the wrong network, so trusting the switch
//! call's success is not enough.

use tracing::{info, warn};

use crate::{Error, Result, app::config::ChainProfile, chain::Address, ports::WalletGateway};

/// Connect the wallet and make sure it is on the target chain.
///
/// Returns the connected address, re-read after any network change (the
/// account can change under a switch).
///
/// # Errors
///
/// - [`Error::ConnectionRejected`] / [`Error::WalletUnavailable`] from the
///   account request
/// - [`Error::SwitchRejected`] / [`Error::AddChainFailed`] when the user
///   declines the network prompts
/// - [`Error::NetworkMismatch`] when the wallet still reports the wrong
///   chain after negotiation
pub fn establish<W: WalletGateway>(wallet: &mut W, profile: &ChainProfile) -> Result<Address> {
    let address = wallet.request_accounts()?;
    info!(address = %address.short(), "wallet connected");

    ensure_network(wallet, profile)?;

    // Re-read after the network dance: the account may have changed
    let address = wallet.address()?;
    info!(address = %address.short(), chain = %profile.chain_id, "on target network");
    Ok(address)
}

/// Put the wallet on `profile`'s chain, adding it when unknown.
///
/// # Errors
///
/// See [`establish`].
pub fn ensure_network<W: WalletGateway>(wallet: &mut W, profile: &ChainProfile) -> Result<()> {
    let current = wallet.chain_id()?;
    if current == profile.chain_id {
        return Ok(());
    }

    info!(from = %current, to = %profile.chain_id, "requesting network switch");
    match wallet.switch_chain(profile.chain_id) {
        Ok(()) => {}
        Err(Error::UnknownChain { .. }) => {
            info!(chain = %profile.chain_id, name = %profile.name, "adding network to wallet");
            wallet.add_chain(profile)?;
        }
        Err(e) => {
            warn!(error = %e, "network switch failed");
            return Err(e);
        }
    }

    let actual = wallet.chain_id()?;
    if actual != profile.chain_id {
        warn!(expected = %profile.chain_id, actual = %actual, "wallet still on wrong network");
        return Err(Error::NetworkMismatch {
            expected: profile.chain_id,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::InMemoryWallet, chain::ChainId};

    fn target() -> ChainProfile {
        ChainProfile::status_testnet()
    }

    fn address() -> Address {
        Address::new("0xAbCdEf0123456789AbCdEf0123456789AbCdEf01")
    }

    #[test]
    fn test_connect_on_correct_chain() {
        let mut wallet = InMemoryWallet::new(address(), target().chain_id);
        let connected = establish(&mut wallet, &target()).unwrap();
        assert_eq!(connected, address());
    }

    #[test]
    fn test_connect_switches_known_chain() {
        let mut wallet =
            InMemoryWallet::new(address(), ChainId(1)).with_known_chain(target().chain_id);

        establish(&mut wallet, &target()).unwrap();
        assert_eq!(wallet.current_chain(), target().chain_id);
    }

    #[test]
    fn test_connect_adds_unknown_chain() {
        // Wallet starts on mainnet and has never seen the target
        let mut wallet = InMemoryWallet::new(address(), ChainId(1));

        establish(&mut wallet, &target()).unwrap();
        assert_eq!(wallet.current_chain(), target().chain_id);
    }

    #[test]
    fn test_rejected_connection() {
        let mut wallet =
            InMemoryWallet::new(address(), target().chain_id).rejecting_connection();
        assert!(matches!(
            establish(&mut wallet, &target()),
            Err(Error::ConnectionRejected)
        ));
    }

    #[test]
    fn test_rejected_switch_propagates() {
        let mut wallet = InMemoryWallet::new(address(), ChainId(1))
            .with_known_chain(target().chain_id)
            .rejecting_switch();

        assert!(matches!(
            establish(&mut wallet, &target()),
            Err(Error::SwitchRejected { .. })
        ));
    }

    #[test]
    fn test_rejected_add_propagates() {
        let mut wallet = InMemoryWallet::new(address(), ChainId(1)).rejecting_add();
        assert!(matches!(
            establish(&mut wallet, &target()),
            Err(Error::AddChainFailed { .. })
        ));
    }
}
