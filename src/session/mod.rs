//! The turn controller.
//!
//! A session owns the board, the opponent policy, the win streak, and the
//! move scheduler, and enforces strict alternation: human input is only
//! accepted in `AwaitingHuman`, the opponent only moves when its scheduled
//! task fires in `AwaitingOpponent`, and a terminal board accepts nothing
//! until reset. Every session carries a generation counter; reset bumps it,
//! which both cancels the pending opponent move and invalidates status
//! updates from a previous game's reward transactions.

pub mod scheduler;

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::{
    app::config::GameConfig,
    game::{Board, OpponentPolicy, Outcome, Player},
    rewards::{RewardDue, StatusUpdate, WinStreak},
};
use self::scheduler::{Scheduler, Task};

/// Where the turn protocol currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman,
    AwaitingOpponent,
    Terminal,
}

/// What a session call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// Input was illegal for the current state; nothing changed
    Ignored,
    /// The human move applied; the opponent's reply is scheduled
    OpponentScheduled,
    /// The opponent placed its mark; back to the human
    OpponentMoved { position: usize },
    /// The game ended; `reward` is set when the human won
    GameOver {
        outcome: Outcome,
        reward: Option<RewardDue>,
    },
}

/// A single player-versus-opponent session.
#[derive(Debug)]
pub struct Session {
    board: Board,
    policy: OpponentPolicy,
    streak: WinStreak,
    scheduler: Scheduler,
    phase: Phase,
    generation: u64,
    status: String,
    think_delay: Duration,
}

const YOUR_TURN: &str = "Your turn (X)!";

impl Session {
    /// Create a fresh session awaiting the human's first move.
    pub fn new(config: &GameConfig) -> Self {
        Self::build(config, OpponentPolicy::new())
    }

    /// Create a session with a seeded opponent for reproducible games.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::build(config, OpponentPolicy::with_seed(seed))
    }

    fn build(config: &GameConfig, policy: OpponentPolicy) -> Self {
        Session {
            board: Board::new(),
            policy,
            streak: WinStreak::new(config.streak_target),
            scheduler: Scheduler::new(),
            phase: Phase::AwaitingHuman,
            generation: 0,
            status: YOUR_TURN.to_string(),
            think_delay: config.think_delay,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current consecutive-win count.
    pub fn streak(&self) -> u32 {
        self.streak.count()
    }

    /// Current user-facing status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// When the driver should call [`Session::tick`] next, if anything is
    /// scheduled.
    pub fn next_wake(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    /// Start a new game: clear the board, cancel any pending opponent move,
    /// and invalidate status updates from the previous game. The win
    /// streak survives; only game outcomes change it.
    pub fn reset(&mut self) {
        self.board.reset();
        self.scheduler.clear();
        self.generation += 1;
        self.phase = Phase::AwaitingHuman;
        self.status = YOUR_TURN.to_string();
        info!(generation = self.generation, "new game started");
    }

    /// Replace the board with an in-progress position with X to move,
    /// keeping the streak and generation. Returns `false` (unchanged)
    /// for terminal positions or positions where it is O's turn.
    pub fn load_position(&mut self, board: Board) -> bool {
        if board.evaluate() != Outcome::InProgress || board.turn() != Player::X {
            return false;
        }
        self.board = board;
        self.scheduler.clear();
        self.phase = Phase::AwaitingHuman;
        self.status = YOUR_TURN.to_string();
        true
    }

    /// Handle a human click on `position`.
    ///
    /// Illegal input (wrong phase, occupied cell, out of range) is silently
    /// ignored with no state change.
    pub fn human_move(&mut self, position: usize) -> TurnEvent {
        if self.phase != Phase::AwaitingHuman {
            return TurnEvent::Ignored;
        }
        if !self.board.place(position, Player::X) {
            return TurnEvent::Ignored;
        }
        debug!(position, "human move");

        match self.board.evaluate() {
            Outcome::InProgress => {
                self.phase = Phase::AwaitingOpponent;
                self.status = "Opponent is thinking...".to_string();
                self.scheduler
                    .schedule(Task::OpponentMove, self.generation, self.think_delay);
                TurnEvent::OpponentScheduled
            }
            outcome => self.finish(outcome),
        }
    }

    /// Fire any scheduled work due at `now`.
    ///
    /// Tasks scheduled before the last reset carry a stale generation and
    /// are dropped.
    pub fn tick(&mut self, now: Instant) -> TurnEvent {
        for task in self.scheduler.due(now) {
            if task.generation != self.generation {
                debug!(
                    task_generation = task.generation,
                    generation = self.generation,
                    "dropping stale task"
                );
                continue;
            }
            match task.task {
                Task::OpponentMove => return self.opponent_move(),
            }
        }
        TurnEvent::Ignored
    }

    /// Apply a reward status update unless it belongs to an older game.
    /// Returns whether the status line changed.
    pub fn apply_update(&mut self, update: &StatusUpdate) -> bool {
        if update.generation != self.generation {
            debug!(
                update_generation = update.generation,
                generation = self.generation,
                "dropping stale status update"
            );
            return false;
        }
        self.status = update.text.clone();
        true
    }

    fn opponent_move(&mut self) -> TurnEvent {
        if self.phase != Phase::AwaitingOpponent {
            return TurnEvent::Ignored;
        }

        // The session never schedules the opponent on a full board, so
        // decide() always has a candidate here.
        let Ok(position) = self.policy.decide(&self.board) else {
            return TurnEvent::Ignored;
        };
        self.board.place(position, Player::O);
        debug!(position, "opponent move");

        match self.board.evaluate() {
            Outcome::InProgress => {
                self.phase = Phase::AwaitingHuman;
                self.status = YOUR_TURN.to_string();
                TurnEvent::OpponentMoved { position }
            }
            outcome => self.finish(outcome),
        }
    }

    fn finish(&mut self, outcome: Outcome) -> TurnEvent {
        let reward = match outcome {
            Outcome::Win(Player::X) => {
                let mint_due = self.streak.record_win();
                self.status = if mint_due {
                    "You win! Streak complete, minting your collectible...".to_string()
                } else {
                    format!("You win! Streak: {}", self.streak.count())
                };
                info!(streak = self.streak.count(), mint_due, "human won");
                Some(RewardDue {
                    generation: self.generation,
                    mint_due,
                })
            }
            Outcome::Win(Player::O) => {
                self.streak.clear();
                self.status = "O wins! Streak reset.".to_string();
                info!("opponent won");
                None
            }
            Outcome::Draw => {
                self.streak.clear();
                self.status = "It's a draw! Streak reset.".to_string();
                info!("draw");
                None
            }
            // Callers only finish terminal outcomes
            Outcome::InProgress => return TurnEvent::Ignored,
        };
        self.phase = Phase::Terminal;
        TurnEvent::GameOver { outcome, reward }
    }
}
