//! 飞将检测
//!
//! 在棋盘副本上模拟将的走法，再检查两将是否对脸。
//! 真实棋盘在整个过程中不会被修改。

use log::trace;

use crate::board::Board;
use crate::types::{Color, Piece, PieceType, Position};

/// 走将之后两将是否对脸
pub fn leaves_generals_facing(board: &Board, color: Color, from: Position, to: Position) -> bool {
    let mut view = board.clone();
    view.remove(from);
    view.place(to, Piece::new(color, PieceType::General));
    let facing = view.generals_facing();
    trace!("facing check {} {} -> {}: {}", color, from, to, facing);
    facing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_facing_after_move() {
        let mut board = Board::empty();
        board.place(pos(1, 4), Piece::new(Color::Red, PieceType::General));
        board.place(pos(10, 5), Piece::new(Color::Black, PieceType::General));
        assert!(leaves_generals_facing(&board, Color::Red, pos(1, 4), pos(1, 5)));
        assert!(!leaves_generals_facing(&board, Color::Red, pos(1, 4), pos(2, 4)));
    }

    #[test]
    fn test_board_untouched() {
        let mut board = Board::empty();
        board.place(pos(1, 4), Piece::new(Color::Red, PieceType::General));
        board.place(pos(1, 5), Piece::new(Color::Black, PieceType::Rook));
        board.place(pos(10, 5), Piece::new(Color::Black, PieceType::General));
        let before = board.clone();
        assert!(leaves_generals_facing(&board, Color::Red, pos(1, 4), pos(1, 5)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_single_general() {
        let mut board = Board::empty();
        board.place(pos(1, 5), Piece::new(Color::Red, PieceType::General));
        assert!(!leaves_generals_facing(&board, Color::Red, pos(1, 5), pos(2, 5)));
    }

    #[test]
    fn test_blocker_removed_by_move() {
        // 将本身不在两将之间时，中间的子仍然挡住
        let mut board = Board::empty();
        board.place(pos(2, 4), Piece::new(Color::Red, PieceType::General));
        board.place(pos(5, 5), Piece::new(Color::Red, PieceType::Soldier));
        board.place(pos(10, 5), Piece::new(Color::Black, PieceType::General));
        assert!(!leaves_generals_facing(&board, Color::Red, pos(2, 4), pos(2, 5)));
    }
}
