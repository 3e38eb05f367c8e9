//! Error types for the hashmark crate

use thiserror::Error;

use crate::chain::{ChainId, TxHash};

/// Main error type for the hashmark crate
///
/// Illegal moves are deliberately absent: an occupied cell, a click out of
/// turn, or input on a finished game is an ignorable event, not a fault
/// (see [`crate::game::Board::place`]).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("no wallet provider detected")]
    WalletUnavailable,

    #[error("wallet connection rejected by the user")]
    ConnectionRejected,

    #[error("chain {chain_id} is not known to the wallet")]
    UnknownChain { chain_id: ChainId },

    #[error("switch to chain {chain_id} rejected")]
    SwitchRejected { chain_id: ChainId },

    #[error("failed to add chain {chain_id}: {message}")]
    AddChainFailed { chain_id: ChainId, message: String },

    #[error("wrong network: expected chain {expected}, wallet reports {actual}")]
    NetworkMismatch { expected: ChainId, actual: ChainId },

    #[error("transaction rejected: {message}")]
    TxRejected { message: String },

    #[error("transaction {hash} failed: {message}")]
    TxFailed { hash: TxHash, message: String },

    #[error("unknown transaction {hash}")]
    UnknownTransaction { hash: TxHash },

    #[error("mint rejected: {message}")]
    MintRejected { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
