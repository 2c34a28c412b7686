//! The fixed catalogue of winning lines.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A triple of positions that constitutes a win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The 8 winning lines: 3 rows, 3 columns, 2 diagonals, in that order.
    ///
    /// Catalogue order is the tie-break for win detection: the evaluator
    /// reports the first matching line.
    pub const CATALOGUE: [Line; 8] = [
        // Rows
        Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line([
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ]),
        Line([
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ]),
        // Columns
        Line([
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ]),
        Line([
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ]),
        Line([
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ]),
        // Diagonals
        Line([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// Returns the three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the three positions as board indices.
    pub fn indices(&self) -> [usize; 3] {
        [self.0[0].index(), self.0[1].index(), self.0[2].index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_has_eight_lines() {
        assert_eq!(Line::CATALOGUE.len(), 8);
    }

    #[test]
    fn test_catalogue_order_matches_index_triples() {
        let expected: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for (line, indices) in Line::CATALOGUE.iter().zip(expected) {
            assert_eq!(line.indices(), indices);
        }
    }

    #[test]
    fn test_every_position_appears_in_a_line() {
        for pos in Position::ALL {
            assert!(
                Line::CATALOGUE
                    .iter()
                    .any(|line| line.positions().contains(&pos))
            );
        }
    }
}
