//! 车

use super::{is_straight, PieceRule};
use crate::board::Board;
use crate::types::{Color, PieceType, Position};

/// 直线任意格，中间不能有子
pub struct RookRule;

impl PieceRule for RookRule {
    fn kind(&self) -> PieceType {
        PieceType::Rook
    }

    fn is_valid(&self, board: &Board, _color: Color, from: Position, to: Position) -> bool {
        is_straight(from, to) && board.path_clear(from, to)
    }
}
