//! Win streak accounting and the on-chain reward pipeline.
//!
//! A human win always produces a win-record transaction (a 0-value transfer
//! to the player's own address); the third consecutive win additionally
//! mints the collectible, after which the streak restarts regardless of the
//! mint's fate. Submission and confirmation are decoupled so the game loop
//! never waits on the chain, and every update carries the session
//! generation it belongs to so a reset session can discard stale news.

use tracing::{info, warn};

use crate::{
    chain::{Address, TxHash},
    ports::{CollectibleMinter, TransactionGateway},
};

/// Consecutive-win counter.
///
/// Incremented per human win, cleared on any draw or opponent win, and
/// cleared again the moment the target is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinStreak {
    count: u32,
    target: u32,
}

impl WinStreak {
    pub fn new(target: u32) -> Self {
        WinStreak { count: 0, target }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Record a human win. Returns `true` exactly when the post-increment
    /// count reaches the target, in which case the counter is already back
    /// at zero.
    pub fn record_win(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.target {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Reset on a draw or an opponent win.
    pub fn clear(&mut self) {
        self.count = 0;
    }
}

/// Reward work owed after a terminal human win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardDue {
    /// Session generation at the moment the win landed
    pub generation: u64,
    /// Whether this win completed the streak
    pub mint_due: bool,
}

/// What a pending submission is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardKind {
    WinRecord,
    CollectibleMint,
}

/// A submitted but not yet confirmed reward transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReward {
    pub generation: u64,
    pub kind: RewardKind,
    pub hash: TxHash,
}

/// User-facing status text tagged with the generation it belongs to.
///
/// Consumers drop updates whose generation is older than the live session
/// so a confirmation from a finished game cannot overwrite a fresh game's
/// status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub generation: u64,
    pub text: String,
}

/// Submits win records and collectible mints, settling them later.
///
/// Gateway failures surface as status text and log events only: they never
/// corrupt game state and never block starting a new game.
#[derive(Debug)]
pub struct RewardPipeline<T, M> {
    gateway: T,
    minter: M,
    metadata_uri: String,
    pending: Vec<PendingReward>,
}

impl<T: TransactionGateway, M: CollectibleMinter> RewardPipeline<T, M> {
    pub fn new(gateway: T, minter: M, metadata_uri: impl Into<String>) -> Self {
        RewardPipeline {
            gateway,
            minter,
            metadata_uri: metadata_uri.into(),
            pending: Vec::new(),
        }
    }

    /// Submissions awaiting confirmation.
    pub fn pending(&self) -> &[PendingReward] {
        &self.pending
    }

    /// Submit everything `due` owes: the win record always, the mint when
    /// the streak completed. Returns the status updates the submissions
    /// produced.
    pub fn dispatch(&mut self, player: &Address, due: &RewardDue) -> Vec<StatusUpdate> {
        let mut updates = Vec::new();

        // Win record: 0-value transfer to the player's own address
        match self.gateway.submit(player, 0, &[]) {
            Ok(hash) => {
                info!(hash = %hash, "win record submitted");
                updates.push(StatusUpdate {
                    generation: due.generation,
                    text: format!("You won! Transaction sent: {}", hash.short()),
                });
                self.pending.push(PendingReward {
                    generation: due.generation,
                    kind: RewardKind::WinRecord,
                    hash,
                });
            }
            Err(e) => {
                warn!(error = %e, "win record submission failed");
                updates.push(StatusUpdate {
                    generation: due.generation,
                    text: "Transaction failed. Your win still counts!".to_string(),
                });
            }
        }

        if due.mint_due {
            match self.minter.mint(player, &self.metadata_uri) {
                Ok(hash) => {
                    info!(hash = %hash, "collectible mint submitted");
                    updates.push(StatusUpdate {
                        generation: due.generation,
                        text: format!("Streak complete! Mint sent: {}", hash.short()),
                    });
                    self.pending.push(PendingReward {
                        generation: due.generation,
                        kind: RewardKind::CollectibleMint,
                        hash,
                    });
                }
                Err(e) => {
                    warn!(error = %e, "collectible mint failed");
                    updates.push(StatusUpdate {
                        generation: due.generation,
                        text: "Collectible mint failed.".to_string(),
                    });
                }
            }
        }

        updates
    }

    /// Confirm every pending submission, returning one status update per
    /// settled transaction. Call from the driver's idle loop; the game
    /// does not wait on this.
    pub fn settle(&mut self) -> Vec<StatusUpdate> {
        let pending = std::mem::take(&mut self.pending);
        let mut updates = Vec::new();

        for reward in pending {
            match self.gateway.confirm(&reward.hash) {
                Ok(receipt) => {
                    info!(hash = %receipt.hash, kind = ?reward.kind, "reward confirmed");
                    let text = match reward.kind {
                        RewardKind::WinRecord => {
                            format!("Win recorded on-chain: {}", receipt.hash.short())
                        }
                        RewardKind::CollectibleMint => {
                            format!("Collectible minted: {}", receipt.hash.short())
                        }
                    };
                    updates.push(StatusUpdate {
                        generation: reward.generation,
                        text,
                    });
                }
                Err(e) => {
                    warn!(error = %e, kind = ?reward.kind, "reward confirmation failed");
                    let text = match reward.kind {
                        RewardKind::WinRecord => "Transaction failed to confirm.".to_string(),
                        RewardKind::CollectibleMint => "Collectible mint failed.".to_string(),
                    };
                    updates.push(StatusUpdate {
                        generation: reward.generation,
                        text,
                    });
                }
            }
        }

        updates
    }
}
