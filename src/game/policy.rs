//! The built-in opponent
//!
//! A fixed three-tier heuristic: take an immediate win, else block the
//! opponent's immediate win, else pick uniformly at random among the empty
//! cells. Deliberately beatable; strength is a non-goal.

use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};

use super::{Board, lines};

/// Move selector for the computer-controlled side.
///
/// `decide` is deterministic except for the random fallback: within the win
/// and block tiers the lowest-index candidate is always chosen, which is an
/// observable, tested tie-break.
#[derive(Debug)]
pub struct OpponentPolicy {
    rng: StdRng,
}

impl OpponentPolicy {
    /// Create a policy with a non-deterministic seed
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a policy with a fixed seed for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        OpponentPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Select a move for the side to move on `board`.
    ///
    /// Callers invoke this only on boards evaluating to
    /// [`super::Outcome::InProgress`]; the returned position is always an
    /// empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the board has no empty
    /// cell.
    pub fn decide(&mut self, board: &Board) -> crate::Result<usize> {
        let candidates = board.empty_positions();
        if candidates.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }

        let us = board.turn();

        // Tier 1: complete our own line
        if let Some(&pos) = lines::winning_moves(board.cells(), us).first() {
            return Ok(pos);
        }

        // Tier 2: deny the opponent's completion
        if let Some(&pos) = lines::winning_moves(board.cells(), us.opponent()).first() {
            return Ok(pos);
        }

        // Tier 3: uniform among the remaining empty cells
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }
}

impl Default for OpponentPolicy {
    fn default() -> Self {
        Self::new()
    }
}
