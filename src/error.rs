//! 错误类型
//!
//! 只覆盖构造期错误（坐标越界、无法识别的名称、格式错误）。
//! 走法是否合法用 `bool` 表示，不属于错误。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("Row must be between 1 and 10, got: {0}")]
    InvalidRow(i32),

    #[error("Column must be between 1 and 9, got: {0}")]
    InvalidColumn(i32),

    #[error("Invalid color: {0}")]
    UnknownColor(String),

    #[error("Invalid piece type: {0}")]
    UnknownPieceType(String),

    /// 坐标记号（如 "e0"）无法解析
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("Invalid FEN: {0}")]
    InvalidFen(String),
}

pub type RuleResult<T> = Result<T, RuleError>;
