//! 棋盘存储与遮挡分析
//!
//! 使用数组而非 HashMap 存储棋子。一个格子最多一个棋子，空位为 None。
//! 车、炮、马、象共用的路径检查也放在这里。

use crate::types::{Color, Piece, PieceType, Position, SQUARE_COUNT};

/// 棋盘：位置 -> 棋子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// 90 个格子的棋子数组 (10行 x 9列)
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// 空棋盘
    pub fn empty() -> Board {
        Board {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// 清空棋盘
    pub fn clear(&mut self) {
        self.squares = [None; SQUARE_COUNT];
    }

    /// 获取某位置的棋子
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.to_index()]
    }

    /// 检查位置是否有棋子
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.squares[pos.to_index()].is_some()
    }

    /// 放置棋子，返回原来的占据者
    pub fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        self.squares[pos.to_index()].replace(piece)
    }

    /// 移除棋子
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.to_index()].take()
    }

    /// 棋子数量
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    /// 获取所有棋子（按下标顺序）
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, sq)| Some((Position::from_index(i)?, (*sq)?)))
    }

    /// 找到某方所有将的位置
    ///
    /// 摆子操作不限制将的数量，所以返回列表。
    pub fn generals(&self, color: Color) -> Vec<Position> {
        self.pieces()
            .filter(|(_, p)| p.color == color && p.kind == PieceType::General)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// 找到某方的将（多个时取下标最小者）
    pub fn find_general(&self, color: Color) -> Option<Position> {
        self.generals(color).into_iter().next()
    }

    /// 两点之间（不含端点）经过的格子
    ///
    /// 只对同行或同列的两点有意义，其它情况返回空。
    fn between(from: Position, to: Position) -> impl Iterator<Item = Position> {
        let dr = (to.row() - from.row()).signum();
        let dc = (to.col() - from.col()).signum();
        let straight = (dr == 0) != (dc == 0);
        let steps = if straight {
            (to.row() - from.row()).abs().max((to.col() - from.col()).abs()) - 1
        } else {
            0
        };
        (1..=steps).filter_map(move |i| from.offset(dr * i, dc * i))
    }

    /// 直线路径是否畅通（不含端点）
    ///
    /// 调用方需保证两点同行或同列。
    pub fn path_clear(&self, from: Position, to: Position) -> bool {
        Board::between(from, to).all(|pos| !self.is_occupied(pos))
    }

    /// 直线路径上（不含端点）的棋子数量
    pub fn count_pieces_between(&self, from: Position, to: Position) -> usize {
        Board::between(from, to)
            .filter(|&pos| self.is_occupied(pos))
            .count()
    }

    /// 蹩马腿检查
    ///
    /// 马腿在起点沿位移为 2 的方向上相邻的格子。
    pub fn horse_leg_blocked(&self, from: Position, to: Position) -> bool {
        let dr = to.row() - from.row();
        let dc = to.col() - from.col();
        let leg = if dr.abs() == 2 {
            from.offset(dr.signum(), 0)
        } else {
            from.offset(0, dc.signum())
        };
        leg.map_or(false, |pos| self.is_occupied(pos))
    }

    /// 将帅是否对脸：同列且中间无子
    pub fn generals_facing(&self) -> bool {
        let red = self.generals(Color::Red);
        let black = self.generals(Color::Black);
        red.iter().any(|&r| {
            black
                .iter()
                .any(|&b| r.col() == b.col() && self.path_clear(r, b))
        })
    }
}
