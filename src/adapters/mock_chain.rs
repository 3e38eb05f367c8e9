//! In-memory transaction gateway and collectible minter.
//!
//! Both adapters record every call in shared storage so tests (and the CLI
//! driver) can inspect what reached the chain. Clones share the same
//! ledger, the same pattern the in-memory repositories in the game's test
//! suite rely on.

use std::sync::{Arc, Mutex};

use crate::{
    Error, Result,
    chain::{Address, Receipt, TxHash},
    ports::{CollectibleMinter, TransactionGateway},
};

/// A transaction as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedTx {
    pub hash: TxHash,
    pub to: Address,
    pub value: u128,
    pub data: Vec<u8>,
}

/// Transaction gateway backed by a shared in-memory ledger.
///
/// Every submission is assigned a deterministic pseudo-hash and confirmed
/// on request, unless the failure flags say otherwise.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChain {
    ledger: Arc<Mutex<Vec<SubmittedTx>>>,
    reject_submit: bool,
    fail_confirm: bool,
}

impl InMemoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse all submissions.
    pub fn rejecting_submissions(mut self) -> Self {
        self.reject_submit = true;
        self
    }

    /// Accept submissions but report them as reverted on confirmation.
    pub fn failing_confirmations(mut self) -> Self {
        self.fail_confirm = true;
        self
    }

    /// Number of transactions submitted so far.
    pub fn count(&self) -> usize {
        self.ledger.lock().unwrap().len()
    }

    /// Snapshot of the ledger.
    pub fn submitted(&self) -> Vec<SubmittedTx> {
        self.ledger.lock().unwrap().clone()
    }
}

impl TransactionGateway for InMemoryChain {
    fn submit(&mut self, to: &Address, value: u128, data: &[u8]) -> Result<TxHash> {
        if self.reject_submit {
            return Err(Error::TxRejected {
                message: "user declined".to_string(),
            });
        }

        let mut ledger = self.ledger.lock().unwrap();
        let hash = TxHash::new(format!("0x{:064x}", ledger.len() + 1));
        ledger.push(SubmittedTx {
            hash: hash.clone(),
            to: to.clone(),
            value,
            data: data.to_vec(),
        });
        Ok(hash)
    }

    fn confirm(&mut self, hash: &TxHash) -> Result<Receipt> {
        let ledger = self.ledger.lock().unwrap();
        let known = ledger.iter().any(|tx| &tx.hash == hash);
        if !known {
            return Err(Error::UnknownTransaction { hash: hash.clone() });
        }
        if self.fail_confirm {
            return Err(Error::TxFailed {
                hash: hash.clone(),
                message: "reverted".to_string(),
            });
        }
        Ok(Receipt { hash: hash.clone() })
    }
}

/// A recorded mint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintCall {
    pub hash: TxHash,
    pub to: Address,
    pub metadata_uri: String,
}

/// Collectible minter backed by shared in-memory storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollectible {
    mints: Arc<Mutex<Vec<MintCall>>>,
    reject: bool,
}

impl InMemoryCollectible {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse all mint calls.
    pub fn rejecting_mints(mut self) -> Self {
        self.reject = true;
        self
    }

    /// Number of mints recorded so far.
    pub fn count(&self) -> usize {
        self.mints.lock().unwrap().len()
    }

    /// Snapshot of the recorded mint calls.
    pub fn minted(&self) -> Vec<MintCall> {
        self.mints.lock().unwrap().clone()
    }
}

impl CollectibleMinter for InMemoryCollectible {
    fn mint(&mut self, to: &Address, metadata_uri: &str) -> Result<TxHash> {
        if self.reject {
            return Err(Error::MintRejected {
                message: "user declined".to_string(),
            });
        }

        let mut mints = self.mints.lock().unwrap();
        let hash = TxHash::new(format!("0xmint{:060x}", mints.len() + 1));
        mints.push(MintCall {
            hash: hash.clone(),
            to: to.clone(),
            metadata_uri: metadata_uri.to_string(),
        });
        Ok(hash)
    }
}
