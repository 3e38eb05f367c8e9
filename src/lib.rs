//! hashmark: tic-tac-toe with on-chain win records
//!
//! This crate provides:
//! - A 3x3 game core with terminal-state evaluation
//! - A three-tier heuristic opponent (win, block, random)
//! - A turn-controller session with an explicit, cancellable move scheduler
//! - A reward pipeline recording human wins on-chain and minting a
//!   collectible after a win streak
//! - Trait ports for the wallet, transaction, and token collaborators,
//!   with in-memory adapters for tests and the CLI driver

pub mod adapters;
pub mod app;
pub mod chain;
pub mod error;
pub mod game;
pub mod ports;
pub mod rewards;
pub mod session;

pub use app::{App, ChainProfile, GameConfig};
pub use chain::{Address, ChainId, Receipt, TxHash};
pub use error::{Error, Result};
pub use game::{Board, Cell, OpponentPolicy, Outcome, Player};
pub use rewards::{RewardDue, RewardPipeline, StatusUpdate, WinStreak};
pub use session::{Phase, Session, TurnEvent};
