//! 走法规则模块
//!
//! 每种棋子一个规则实现，只检查几何形状、九宫/河界以及遮挡。
//! 起点归属和吃己方子由 [`crate::game::Game`] 在调用边界检查。

mod cannon;
mod elephant;
mod general;
mod guard;
mod horse;
mod rook;
mod soldier;

pub use cannon::CannonRule;
pub use elephant::ElephantRule;
pub use general::GeneralRule;
pub use guard::GuardRule;
pub use horse::HorseRule;
pub use rook::RookRule;
pub use soldier::SoldierRule;

use crate::board::Board;
use crate::types::{Color, PieceType, Position};

/// 单个棋子的走法规则
pub trait PieceRule {
    /// 该规则对应的棋子类型
    fn kind(&self) -> PieceType;

    /// 走法是否合法（假定 `from` 上是 `color` 方的该类棋子）
    fn is_valid(&self, board: &Board, color: Color, from: Position, to: Position) -> bool;
}

/// 按棋子类型取规则
pub fn rule_for(kind: PieceType) -> &'static dyn PieceRule {
    match kind {
        PieceType::General => &GeneralRule,
        PieceType::Guard => &GuardRule,
        PieceType::Rook => &RookRule,
        PieceType::Horse => &HorseRule,
        PieceType::Cannon => &CannonRule,
        PieceType::Soldier => &SoldierRule,
        PieceType::Elephant => &ElephantRule,
    }
}

/// 按棋子类型校验走法
pub fn is_valid_move(
    board: &Board,
    kind: PieceType,
    color: Color,
    from: Position,
    to: Position,
) -> bool {
    rule_for(kind).is_valid(board, color, from, to)
}

/// 行、列位移的绝对值
#[inline]
pub(crate) fn abs_delta(from: Position, to: Position) -> (i8, i8) {
    (
        (to.row() - from.row()).abs(),
        (to.col() - from.col()).abs(),
    )
}

/// 同行或同列且不是原地
#[inline]
pub(crate) fn is_straight(from: Position, to: Position) -> bool {
    (from.row() == to.row()) != (from.col() == to.col())
}
