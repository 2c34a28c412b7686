//! Outcome evaluation: win and draw detection over a board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::types::Board;
use crate::verdict::Verdict;

/// Evaluates a board into a [`Verdict`].
///
/// Pure query: walks the line catalogue in order and reports the first
/// uniformly-marked line as a win, a full board with no win as a draw,
/// and anything else as in progress. Makes no assumption that the board
/// was reached by legal play, and does not depend on whose turn it is.
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((player, line)) = winning_line(board) {
        return Verdict::Won { player, line };
    }
    if is_full(board) {
        return Verdict::Draw;
    }
    Verdict::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::Line;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Verdict::InProgress);
    }

    #[test]
    fn test_won_and_draw_mutually_exclusive() {
        // X|X|X / O|O|. board: unreachable by legal play, but the evaluator
        // reports the first catalogue match regardless.
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::TopCenter, Player::X).unwrap();
        board.place(Position::TopRight, Player::X).unwrap();
        board.place(Position::MiddleLeft, Player::O).unwrap();
        board.place(Position::Center, Player::O).unwrap();

        assert_eq!(
            evaluate(&board),
            Verdict::Won {
                player: Player::X,
                line: Line::CATALOGUE[0],
            }
        );
    }

    #[test]
    fn test_full_board_without_win_is_draw() {
        // X|O|X / X|O|O / O|X|X
        let mut board = Board::new();
        for (pos, player) in Position::ALL.iter().zip([
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ]) {
            board.place(*pos, player).unwrap();
        }
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Verdict::Draw);
    }

    #[test]
    fn test_full_board_with_win_is_won_not_draw() {
        // X|O|X / O|X|O / X|X|O: full board, X wins the anti-diagonal.
        let mut board = Board::new();
        for (pos, player) in Position::ALL.iter().zip([
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
        ]) {
            board.place(*pos, player).unwrap();
        }
        assert!(matches!(
            evaluate(&board),
            Verdict::Won {
                player: Player::X,
                ..
            }
        ));
    }
}
