//! Ports (trait boundaries) for the external collaborators.
//!
//! The wallet provider, the transaction layer, and the collectible contract
//! are external capabilities. These traits are owned by the domain and
//! implemented by adapters; the game core never talks to a network.

pub mod collectible;
pub mod transaction;
pub mod wallet;

pub use collectible::CollectibleMinter;
pub use transaction::TransactionGateway;
pub use wallet::WalletGateway;
