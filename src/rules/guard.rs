//! 士/仕

use super::{abs_delta, PieceRule};
use crate::board::Board;
use crate::types::{Color, PieceType, Position};

/// 九宫内斜走一步
pub struct GuardRule;

impl PieceRule for GuardRule {
    fn kind(&self) -> PieceType {
        PieceType::Guard
    }

    fn is_valid(&self, _board: &Board, color: Color, from: Position, to: Position) -> bool {
        to.is_in_palace(color) && abs_delta(from, to) == (1, 1)
    }
}
