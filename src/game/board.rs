//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X is the human and always moves first; O is the
/// built-in opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opposing player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to their mark
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Result of evaluating a board.
///
/// Always re-derived from the cells, never stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

/// The 3x3 grid plus whose turn it is.
///
/// Mutated in place one cell at a time through [`Board::place`]; once a
/// terminal outcome is reached the board refuses further placements until
/// [`Board::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
    turn: Player,
}

impl Board {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            turn: Player::X,
        }
    }

    /// Clear all cells and hand the turn back to X. Infallible.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// The player to move
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The raw cells
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a mark, returning whether the move was applied.
    ///
    /// Succeeds only when the position is in range, the target cell is
    /// empty, the game is not already terminal, and it is `player`'s turn.
    /// On any violation the board is left unchanged and `false` is
    /// returned: illegal clicks are ignorable events, not errors.
    pub fn place(&mut self, position: usize, player: Player) -> bool {
        if position >= 9
            || self.cells[position] != Cell::Empty
            || player != self.turn
            || self.evaluate() != Outcome::InProgress
        {
            return false;
        }

        self.cells[position] = player.to_cell();
        self.turn = player.opponent();
        true
    }

    /// Evaluate the board.
    ///
    /// The first fully-owned line in the fixed [`lines::WIN_LINES`] order
    /// decides the winner; a full board with no winner is a draw. Legal
    /// alternating play can never complete lines for both players, so no
    /// second line is looked for.
    pub fn evaluate(&self) -> Outcome {
        if let Some((player, _)) = lines::winning_line(&self.cells) {
            return Outcome::Win(player);
        }
        if self.cells.contains(&Cell::Empty) {
            Outcome::InProgress
        } else {
            Outcome::Draw
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.evaluate() != Outcome::InProgress
    }

    /// Create a board from a 9-character string ('.'/'_'/' ' empty, X, O),
    /// whitespace ignored. The turn is inferred from piece counts under
    /// X-first rules.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 9 cells are present, a character is
    /// not a valid mark, or the piece counts are impossible (difference
    /// outside 0..=1 with X leading).
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        let turn = if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        };

        Ok(Board { cells, turn })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.turn(), Player::X);
        assert_eq!(board.evaluate(), Outcome::InProgress);
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_place_alternates_turns() {
        let mut board = Board::new();
        assert!(board.place(4, Player::X));
        assert_eq!(board.turn(), Player::O);
        assert!(board.place(0, Player::O));
        assert_eq!(board.turn(), Player::X);
    }

    #[test]
    fn test_place_occupied_cell_is_noop() {
        let mut board = Board::new();
        assert!(board.place(4, Player::X));
        let before = board;

        assert!(!board.place(4, Player::O));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_range_is_noop() {
        let mut board = Board::new();
        let before = board;

        assert!(!board.place(9, Player::X));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_turn_is_noop() {
        let mut board = Board::new();
        let before = board;

        assert!(!board.place(0, Player::O));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_after_terminal_is_noop() {
        // X wins on the top row
        let mut board = Board::from_string("XX.OO....").unwrap();
        assert!(board.place(2, Player::X));
        assert_eq!(board.evaluate(), Outcome::Win(Player::X));

        let before = board;
        assert!(!board.place(5, Player::O));
        assert_eq!(board, before);
    }

    #[test]
    fn test_win_detection_rows_columns_diagonals() {
        let row = Board::from_string("XXXOO....").unwrap();
        assert_eq!(row.evaluate(), Outcome::Win(Player::X));

        let column = Board::from_string("OX.OX.O.X").unwrap();
        assert_eq!(column.evaluate(), Outcome::Win(Player::O));

        let diagonal = Board::from_string("XO..XO..X").unwrap();
        assert_eq!(diagonal.evaluate(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        // XOX / XXO / OXO: full board, no line
        let board = Board::from_string("XOXXXOOXO").unwrap();
        assert_eq!(board.evaluate(), Outcome::Draw);
    }

    #[test]
    fn test_nine_alternating_moves_without_line_is_draw() {
        let mut board = Board::new();
        // X: 0 2 3 5 7, O: 1 4 6 8 -> no completed line
        for (pos, player) in [
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (4, Player::O),
            (3, Player::X),
            (6, Player::O),
            (5, Player::X),
            (8, Player::O),
            (7, Player::X),
        ] {
            assert!(board.place(pos, player), "move at {pos} should apply");
        }
        assert_eq!(board.evaluate(), Outcome::Draw);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        board.place(0, Player::X);
        board.place(4, Player::O);

        board.reset();
        assert_eq!(board.evaluate(), Outcome::InProgress);
        assert_eq!(board.turn(), Player::X);
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_from_string_infers_turn() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.turn(), Player::O);

        let balanced = Board::from_string("XO.......").unwrap();
        assert_eq!(balanced.turn(), Player::X);
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
        assert!(Board::from_string("XXX......").is_err());
        assert!(Board::from_string("OO.......").is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered, "XOX\n.O.\nX..");
    }

    #[test]
    fn test_at_most_one_winner_under_legal_play() {
        // Exhaustive over every legal game: play all move sequences and
        // check that a terminal board never has lines for both players.
        fn walk(board: Board, wins_seen: &mut usize) {
            match board.evaluate() {
                Outcome::Win(winner) => {
                    assert!(
                        !super::lines::has_won(board.cells(), winner.opponent()),
                        "board with two winners reached: {board}"
                    );
                    *wins_seen += 1;
                }
                Outcome::Draw => {}
                Outcome::InProgress => {
                    for pos in board.empty_positions() {
                        let mut next = board;
                        assert!(next.place(pos, next.turn()));
                        walk(next, wins_seen);
                    }
                }
            }
        }

        let mut wins_seen = 0;
        walk(Board::new(), &mut wins_seen);
        assert!(wins_seen > 0);
    }
}
