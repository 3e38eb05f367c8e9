//! Winning line analysis for the 3x3 board

use super::board::{Cell, Player};

/// Winning line indices on the 3x3 board.
///
/// The enumeration order (rows, columns, diagonals) is fixed: line-based
/// queries report the first match in this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player owns all three cells of any line
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Find the first fully-owned line and its owner, in [`WIN_LINES`] order.
///
/// A board with two completed lines for different players is unreachable
/// through legal play; for such a board this simply reports the first line
/// in enumeration order rather than asserting.
pub fn winning_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
    for &line in &WIN_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            // A non-empty cell always maps to a player
            let player = match first {
                Cell::X => Player::X,
                Cell::O => Player::O,
                Cell::Empty => unreachable!(),
            };
            return Some((player, line));
        }
    }
    None
}

/// All positions that would immediately win for the player, in ascending
/// index order.
///
/// The ordering matters: the opponent policy takes the first entry, so the
/// lowest-index winning (or blocking) move is an observable tie-break.
pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
    let target = player.to_cell();
    let mut moves = Vec::new();

    for pos in 0..9 {
        if cells[pos] != Cell::Empty {
            continue;
        }
        let mut probe = *cells;
        probe[pos] = target;
        if has_won(&probe, player) {
            moves.push(pos);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(has_won(&cells, Player::X));
        assert!(!has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(has_won(&cells, Player::O));
        assert!(!has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::X;

        assert!(has_won(&cells, Player::X));
    }

    #[test]
    fn test_winning_line_reports_owner() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(winning_line(&cells), Some((Player::O, [2, 4, 6])));
    }

    #[test]
    fn test_winning_line_empty_board() {
        assert_eq!(winning_line(&[Cell::Empty; 9]), None);
    }

    #[test]
    fn test_winning_moves_single() {
        // X.X / ... / ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(winning_moves(&cells, Player::X), vec![1]);
        assert!(winning_moves(&cells, Player::O).is_empty());
    }

    #[test]
    fn test_winning_moves_ascending_order() {
        // XX. / X.. / ... : completes at 2 (top row) and 6 (left column)
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        assert_eq!(winning_moves(&cells, Player::X), vec![2, 6]);
    }
}
