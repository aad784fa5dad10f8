//! 卒/兵

use super::PieceRule;
use crate::board::Board;
use crate::types::{Color, PieceType, Position};

/// 未过河只能前进一步；过河后可前进或横走一步，永远不能后退
pub struct SoldierRule;

impl PieceRule for SoldierRule {
    fn kind(&self) -> PieceType {
        PieceType::Soldier
    }

    fn is_valid(&self, _board: &Board, color: Color, from: Position, to: Position) -> bool {
        let dr = to.row() - from.row();
        let dc = (to.col() - from.col()).abs();
        let forward = dr == color.forward() && dc == 0;
        if from.is_on_own_side(color) {
            forward
        } else {
            forward || (dr == 0 && dc == 1)
        }
    }
}
