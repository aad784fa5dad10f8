//! 将/帅

use super::{abs_delta, PieceRule};
use crate::board::Board;
use crate::check::leaves_generals_facing;
use crate::types::{Color, PieceType, Position};

/// 九宫内上下左右走一步，走后不能与对方将对脸
pub struct GeneralRule;

impl PieceRule for GeneralRule {
    fn kind(&self) -> PieceType {
        PieceType::General
    }

    fn is_valid(&self, board: &Board, color: Color, from: Position, to: Position) -> bool {
        if !to.is_in_palace(color) {
            return false;
        }
        let (dr, dc) = abs_delta(from, to);
        if dr + dc != 1 {
            return false;
        }
        !leaves_generals_facing(board, color, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_util::{board_with, pos};
    use crate::types::Piece;

    #[test]
    fn test_single_step_in_palace() {
        let board = board_with(Color::Red, PieceType::General, pos(1, 5));
        assert!(GeneralRule.is_valid(&board, Color::Red, pos(1, 5), pos(2, 5)));
        assert!(GeneralRule.is_valid(&board, Color::Red, pos(1, 5), pos(1, 4)));
        assert!(!GeneralRule.is_valid(&board, Color::Red, pos(1, 5), pos(2, 4)));
        assert!(!GeneralRule.is_valid(&board, Color::Red, pos(1, 5), pos(3, 5)));
    }

    #[test]
    fn test_cannot_leave_palace() {
        let board = board_with(Color::Red, PieceType::General, pos(1, 4));
        assert!(!GeneralRule.is_valid(&board, Color::Red, pos(1, 4), pos(1, 3)));
        let board = board_with(Color::Red, PieceType::General, pos(3, 5));
        assert!(!GeneralRule.is_valid(&board, Color::Red, pos(3, 5), pos(4, 5)));
        let board = board_with(Color::Black, PieceType::General, pos(8, 6));
        assert!(!GeneralRule.is_valid(&board, Color::Black, pos(8, 6), pos(7, 6)));
        assert!(GeneralRule.is_valid(&board, Color::Black, pos(8, 6), pos(9, 6)));
    }

    #[test]
    fn test_facing_rejected() {
        let mut board = board_with(Color::Red, PieceType::General, pos(1, 5));
        board.place(pos(10, 5), Piece::new(Color::Black, PieceType::General));
        assert!(!GeneralRule.is_valid(&board, Color::Red, pos(1, 5), pos(2, 5)));
        // 走开同列则不对脸
        assert!(GeneralRule.is_valid(&board, Color::Red, pos(1, 5), pos(1, 6)));
    }

    #[test]
    fn test_screen_between_generals() {
        let mut board = board_with(Color::Red, PieceType::General, pos(1, 4));
        board.place(pos(10, 5), Piece::new(Color::Black, PieceType::General));
        board.place(pos(6, 5), Piece::new(Color::Black, PieceType::Soldier));
        assert!(GeneralRule.is_valid(&board, Color::Red, pos(1, 4), pos(1, 5)));
    }
}
