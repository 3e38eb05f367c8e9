//! In-memory adapters for every port.
//!
//! These back the test suite and the CLI driver. Production front-ends
//! would supply adapters speaking to a real provider; none ship here
//! because the wallet and the contract are external collaborators.

pub mod mock_chain;
pub mod mock_wallet;

pub use mock_chain::{InMemoryChain, InMemoryCollectible, MintCall, SubmittedTx};
pub use mock_wallet::InMemoryWallet;
