//! Game domain core: board state, win lines, and the opponent policy

pub mod board;
pub mod lines;
pub mod policy;

pub use board::{Board, Cell, Outcome, Player};
pub use policy::OpponentPolicy;
