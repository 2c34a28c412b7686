//! Win detection logic.

use crate::lines::Line;
use crate::types::{Board, Cell, Player};

/// Checks the board for a completed line.
///
/// Walks [`Line::CATALOGUE`] in order and returns the first line whose three
/// cells hold the same player's mark, together with that player. Returns
/// `None` when no line is complete.
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    for line in Line::CATALOGUE {
        let [a, b, c] = line.positions();
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            if let Cell::Occupied(player) = cell {
                return Some((player, line));
            }
        }
    }
    None
}
