//! 象棋核心类型定义
//!
//! 定义阵营、棋子、坐标以及棋盘拓扑常量。
//! 字符串形式（"Red"、"General"、"e0"）只在边界处解析，内部逻辑只使用枚举。

use std::fmt;
use std::str::FromStr;

use crate::error::{RuleError, RuleResult};

/// 棋盘行数
pub const BOARD_ROWS: i8 = 10;
/// 棋盘列数
pub const BOARD_COLS: i8 = 9;
/// 格子总数
pub const SQUARE_COUNT: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);
/// 河界：红方半场为 1..=5，黑方半场为 6..=10
pub const RIVER_BOUNDARY: i8 = 5;
/// 九宫列范围
pub const PALACE_MIN_COL: i8 = 4;
pub const PALACE_MAX_COL: i8 = 6;
/// 红方九宫行范围
pub const RED_PALACE_MIN_ROW: i8 = 1;
pub const RED_PALACE_MAX_ROW: i8 = 3;
/// 黑方九宫行范围
pub const BLACK_PALACE_MIN_ROW: i8 = 8;
pub const BLACK_PALACE_MAX_ROW: i8 = 10;

/// 棋子颜色/阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// 获取对方阵营
    pub fn opposite(&self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Black => "Black",
        }
    }

    /// 兵卒前进方向（行号增量）
    pub fn forward(&self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Color {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RuleError::UnknownColor(s.to_string()))
    }
}

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    /// 将/帅
    General,
    /// 士/仕
    Guard,
    /// 车
    Rook,
    /// 马
    Horse,
    /// 炮
    Cannon,
    /// 卒/兵
    Soldier,
    /// 象/相
    Elephant,
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::General,
        PieceType::Guard,
        PieceType::Rook,
        PieceType::Horse,
        PieceType::Cannon,
        PieceType::Soldier,
        PieceType::Elephant,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PieceType::General => "General",
            PieceType::Guard => "Guard",
            PieceType::Rook => "Rook",
            PieceType::Horse => "Horse",
            PieceType::Cannon => "Cannon",
            PieceType::Soldier => "Soldier",
            PieceType::Elephant => "Elephant",
        }
    }

    /// 从 FEN 字符解析（大小写不敏感）
    pub fn from_fen_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceType::General),
            'a' => Some(PieceType::Guard),
            'e' => Some(PieceType::Elephant),
            'h' => Some(PieceType::Horse),
            'r' => Some(PieceType::Rook),
            'c' => Some(PieceType::Cannon),
            'p' => Some(PieceType::Soldier),
            _ => None,
        }
    }

    /// 转换为 FEN 字符（小写）
    pub fn to_fen_char(&self) -> char {
        match self {
            PieceType::General => 'k',
            PieceType::Guard => 'a',
            PieceType::Elephant => 'e',
            PieceType::Horse => 'h',
            PieceType::Rook => 'r',
            PieceType::Cannon => 'c',
            PieceType::Soldier => 'p',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PieceType {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceType::ALL
            .into_iter()
            .find(|pt| pt.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RuleError::UnknownPieceType(s.to_string()))
    }
}

/// 棋子：阵营 + 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Piece { color, kind }
    }

    #[inline]
    pub fn is_general(&self) -> bool {
        self.kind == PieceType::General
    }

    /// FEN 字符：红方大写，黑方小写
    pub fn to_fen_char(&self) -> char {
        let ch = self.kind.to_fen_char();
        match self.color {
            Color::Red => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceType::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::Red
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// 解析 "Red General" 形式
impl FromStr for Piece {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(color), Some(kind), None) => Ok(Piece::new(color.parse()?, kind.parse()?)),
            _ => Err(RuleError::UnknownPieceType(s.to_string())),
        }
    }
}

/// 棋盘位置 (row, col)
///
/// row: 1-10 (1 是红方底线，10 是黑方底线)
/// col: 1-9 (从左到右)
///
/// 只能通过 [`Position::new`] 等校验过的途径构造，所以持有的值总是在棋盘内。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    pub fn new(row: i32, col: i32) -> RuleResult<Position> {
        if !(1..=BOARD_ROWS as i32).contains(&row) {
            return Err(RuleError::InvalidRow(row));
        }
        if !(1..=BOARD_COLS as i32).contains(&col) {
            return Err(RuleError::InvalidColumn(col));
        }
        Ok(Position {
            row: row as i8,
            col: col as i8,
        })
    }

    #[inline]
    pub fn row(&self) -> i8 {
        self.row
    }

    #[inline]
    pub fn col(&self) -> i8 {
        self.col
    }

    /// 数组下标 (0..90)
    #[inline]
    pub fn to_index(&self) -> usize {
        (self.row as usize - 1) * BOARD_COLS as usize + (self.col as usize - 1)
    }

    /// 由数组下标还原位置，越界返回 None
    pub fn from_index(index: usize) -> Option<Position> {
        if index >= SQUARE_COUNT {
            return None;
        }
        let cols = BOARD_COLS as usize;
        Some(Position {
            row: (index / cols) as i8 + 1,
            col: (index % cols) as i8 + 1,
        })
    }

    /// 位置加偏移量，出界返回 None
    pub fn offset(&self, row_delta: i8, col_delta: i8) -> Option<Position> {
        Position::new(
            self.row as i32 + row_delta as i32,
            self.col as i32 + col_delta as i32,
        )
        .ok()
    }

    /// 检查位置是否在该方九宫格内
    pub fn is_in_palace(&self, color: Color) -> bool {
        if !(PALACE_MIN_COL..=PALACE_MAX_COL).contains(&self.col) {
            return false;
        }
        match color {
            Color::Red => (RED_PALACE_MIN_ROW..=RED_PALACE_MAX_ROW).contains(&self.row),
            Color::Black => (BLACK_PALACE_MIN_ROW..=BLACK_PALACE_MAX_ROW).contains(&self.row),
        }
    }

    /// 检查位置是否在该方半场（未过河）
    pub fn is_on_own_side(&self, color: Color) -> bool {
        match color {
            Color::Red => self.row <= RIVER_BOUNDARY,
            Color::Black => self.row > RIVER_BOUNDARY,
        }
    }

    /// 从坐标记号解析（如 "e0" = 第 1 行第 5 列）
    pub fn from_notation(s: &str) -> RuleResult<Position> {
        let invalid = || RuleError::InvalidSquare(s.to_string());
        let mut chars = s.trim().chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f, r),
            _ => return Err(invalid()),
        };
        let col = match file.to_ascii_lowercase() {
            c @ 'a'..='i' => (c as i32) - ('a' as i32) + 1,
            _ => return Err(invalid()),
        };
        let row = rank.to_digit(10).ok_or_else(invalid)? as i32 + 1;
        Position::new(row, col)
    }

    /// 转换为坐标记号（如 "e0"）
    pub fn to_notation(&self) -> String {
        let file = (b'a' + (self.col - 1) as u8) as char;
        format!("{}{}", file, self.row - 1)
    }

    /// 遍历棋盘上所有位置（按下标顺序）
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SQUARE_COUNT).filter_map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
