//! Transaction port
//!
//! Boundary to transaction submission and confirmation. Submission and
//! confirmation are separate calls so the game loop never blocks on the
//! chain: a pipeline submits, keeps the handle, and settles later.

use crate::{
    Result,
    chain::{Address, Receipt, TxHash},
};

/// Port for the transaction capability.
pub trait TransactionGateway {
    /// Submit a transaction and return its handle immediately.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TxRejected`] when the wallet or node
    /// refuses the submission.
    fn submit(&mut self, to: &Address, value: u128, data: &[u8]) -> Result<TxHash>;

    /// Confirm a previously submitted transaction.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::UnknownTransaction`] for a handle this gateway
    ///   never issued
    /// - [`crate::Error::TxFailed`] when the transaction reverted
    fn confirm(&mut self, hash: &TxHash) -> Result<Receipt>;
}
