//! 马

use super::{abs_delta, PieceRule};
use crate::board::Board;
use crate::types::{Color, PieceType, Position};

/// 日字，马腿不能被堵
pub struct HorseRule;

impl PieceRule for HorseRule {
    fn kind(&self) -> PieceType {
        PieceType::Horse
    }

    fn is_valid(&self, board: &Board, _color: Color, from: Position, to: Position) -> bool {
        match abs_delta(from, to) {
            (2, 1) | (1, 2) => !board.horse_leg_blocked(from, to),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_util::{board_with, pos};
    use crate::types::Piece;

    #[test]
    fn test_l_shape() {
        let board = board_with(Color::Red, PieceType::Horse, pos(3, 3));
        for (r, c) in [(5, 4), (5, 2), (1, 4), (1, 2), (4, 5), (2, 5), (4, 1), (2, 1)] {
            assert!(HorseRule.is_valid(&board, Color::Red, pos(3, 3), pos(r, c)));
        }
        assert!(!HorseRule.is_valid(&board, Color::Red, pos(3, 3), pos(5, 5)));
        assert!(!HorseRule.is_valid(&board, Color::Red, pos(3, 3), pos(3, 5)));
        assert!(!HorseRule.is_valid(&board, Color::Red, pos(3, 3), pos(6, 4)));
    }

    #[test]
    fn test_leg_blocked() {
        let mut board = board_with(Color::Red, PieceType::Horse, pos(3, 3));
        board.place(pos(4, 3), Piece::new(Color::Black, PieceType::Rook));
        assert!(!HorseRule.is_valid(&board, Color::Red, pos(3, 3), pos(5, 4)));
        assert!(!HorseRule.is_valid(&board, Color::Red, pos(3, 3), pos(5, 2)));
        // 另一方向不受影响
        assert!(HorseRule.is_valid(&board, Color::Red, pos(3, 3), pos(4, 5)));
        assert!(HorseRule.is_valid(&board, Color::Red, pos(3, 3), pos(1, 4)));
    }
}
