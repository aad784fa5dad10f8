//! 炮

use super::{is_straight, PieceRule};
use crate::board::Board;
use crate::types::{Color, PieceType, Position};

/// 炮架数量：吃子时必须正好隔一个子
const CANNON_SCREEN_COUNT: usize = 1;

/// 不吃子时同车；吃子时中间正好一个炮架
pub struct CannonRule;

impl PieceRule for CannonRule {
    fn kind(&self) -> PieceType {
        PieceType::Cannon
    }

    fn is_valid(&self, board: &Board, _color: Color, from: Position, to: Position) -> bool {
        if !is_straight(from, to) {
            return false;
        }
        if board.is_occupied(to) {
            board.count_pieces_between(from, to) == CANNON_SCREEN_COUNT
        } else {
            board.path_clear(from, to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_util::{board_with, pos};
    use crate::types::Piece;

    #[test]
    fn test_slide_like_rook() {
        let mut board = board_with(Color::Red, PieceType::Cannon, pos(3, 2));
        assert!(CannonRule.is_valid(&board, Color::Red, pos(3, 2), pos(3, 8)));
        board.place(pos(3, 5), Piece::new(Color::Red, PieceType::Soldier));
        assert!(!CannonRule.is_valid(&board, Color::Red, pos(3, 2), pos(3, 8)));
        assert!(!CannonRule.is_valid(&board, Color::Red, pos(3, 2), pos(4, 3)));
    }

    #[test]
    fn test_capture_needs_one_screen() {
        let mut board = board_with(Color::Red, PieceType::Cannon, pos(1, 1));
        board.place(pos(1, 9), Piece::new(Color::Black, PieceType::Rook));
        assert!(!CannonRule.is_valid(&board, Color::Red, pos(1, 1), pos(1, 9)));
        board.place(pos(1, 5), Piece::new(Color::Black, PieceType::Soldier));
        assert!(CannonRule.is_valid(&board, Color::Red, pos(1, 1), pos(1, 9)));
        board.place(pos(1, 7), Piece::new(Color::Red, PieceType::Horse));
        assert!(!CannonRule.is_valid(&board, Color::Red, pos(1, 1), pos(1, 9)));
    }

    #[test]
    fn test_vertical_capture() {
        let mut board = board_with(Color::Black, PieceType::Cannon, pos(8, 2));
        board.place(pos(5, 2), Piece::new(Color::Red, PieceType::Soldier));
        board.place(pos(1, 2), Piece::new(Color::Red, PieceType::Horse));
        assert!(CannonRule.is_valid(&board, Color::Black, pos(8, 2), pos(1, 2)));
        assert!(!CannonRule.is_valid(&board, Color::Black, pos(8, 2), pos(5, 2)));
    }
}
