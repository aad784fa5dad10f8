//! 象/相

use super::{abs_delta, PieceRule};
use crate::board::Board;
use crate::types::{Color, PieceType, Position};

/// 田字，不能过河，象眼不能被塞
pub struct ElephantRule;

impl PieceRule for ElephantRule {
    fn kind(&self) -> PieceType {
        PieceType::Elephant
    }

    fn is_valid(&self, board: &Board, color: Color, from: Position, to: Position) -> bool {
        if abs_delta(from, to) != (2, 2) {
            return false;
        }
        if !to.is_on_own_side(color) {
            return false;
        }
        let eye = from.offset(
            (to.row() - from.row()) / 2,
            (to.col() - from.col()) / 2,
        );
        eye.map_or(false, |pos| !board.is_occupied(pos))
    }
}
