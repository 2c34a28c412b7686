//! Optimal-play search for the automated opponent.
//!
//! Exhaustive adversarial search over the remaining game tree. The 9-cell
//! bound keeps the worst case (an empty board) well under real-time
//! constraints without pruning, so the search trades speed for the simplest
//! possible correctness argument: every reachable terminal is scored, and
//! depth weighting orders otherwise-equal outcomes so the engine prefers the
//! fastest win and the slowest loss.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, Player};
use crate::verdict::Verdict;
use tracing::{debug, instrument};

/// Selects the best move for `player` on the given board.
///
/// Returns `None` only when the board has no empty cell. On any non-terminal
/// board the returned position is empty, and its subtree score is negative
/// only if every legal move's subtree score is negative: the oracle loses
/// only when loss is already forced.
///
/// The input board is never mutated; each candidate is explored on a copy.
/// Ties between equal-value candidates break toward the lowest index: only a
/// strictly greater score replaces the current best.
#[instrument(skip(board))]
pub fn best_move(board: &Board, player: Player) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;
    for pos in Position::valid_moves(board) {
        let mut child = *board;
        child.set(pos, Cell::Occupied(player));
        let score = value(&child, player, 1, false);
        debug!(position = %pos, score, "Scored candidate move");
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }
    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "Selected move");
    }
    best.map(|(pos, _)| pos)
}

/// Scores a board from the searching player's perspective.
///
/// Terminal positions score `10 - depth` for a win by the searcher,
/// `depth - 10` for a win by the opponent, and `0` for a draw. Non-terminal
/// positions recurse over every empty cell with the mark of whoever moves at
/// this ply placed on a fresh copy, taking the maximum child value on the
/// searcher's plies and the minimum on the opponent's.
fn value(board: &Board, searcher: Player, depth: i32, maximizing: bool) -> i32 {
    match rules::evaluate(board) {
        Verdict::Won { player, .. } => {
            if player == searcher {
                10 - depth
            } else {
                depth - 10
            }
        }
        Verdict::Draw => 0,
        Verdict::InProgress => {
            let mover = if maximizing {
                searcher
            } else {
                searcher.opponent()
            };
            let mut acc = if maximizing { i32::MIN } else { i32::MAX };
            for pos in Position::valid_moves(board) {
                let mut child = *board;
                child.set(pos, Cell::Occupied(mover));
                let score = value(&child, searcher, depth + 1, !maximizing);
                acc = if maximizing {
                    acc.max(score)
                } else {
                    acc.min(score)
                };
            }
            acc
        }
    }
}
