//! FEN 棋盘串解析和生成
//!
//! 只处理 FEN 的棋盘部分：十行以 `/` 分隔，第一行是第 10 行（黑方底线）。
//!
//! 棋盘符号：
//! - 红方：K(帅) A(仕) E(相) H(马) R(车) C(炮) P(兵)
//! - 黑方：k a e h r c p
//! - 空格：数字 (1-9)

use crate::board::Board;
use crate::error::{RuleError, RuleResult};
use crate::types::{Piece, Position, BOARD_COLS, BOARD_ROWS};

/// 解析 FEN 棋盘串
///
/// 串后可以跟其它字段（回合等），这些字段会被忽略。
pub fn parse_board(fen: &str) -> RuleResult<Board> {
    let board_str = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| RuleError::InvalidFen("empty string".to_string()))?;

    let ranks: Vec<&str> = board_str.split('/').collect();
    if ranks.len() != BOARD_ROWS as usize {
        return Err(RuleError::InvalidFen(format!(
            "expected {} rows, got {}",
            BOARD_ROWS,
            ranks.len()
        )));
    }

    let mut board = Board::empty();

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        // FEN 从上往下是第 10 行到第 1 行
        let row = BOARD_ROWS as i32 - rank_idx as i32;
        let mut col: i32 = 0;

        for ch in rank_str.chars() {
            if let Some(skip) = ch.to_digit(10) {
                if skip == 0 {
                    return Err(RuleError::InvalidFen(format!("zero skip in row {}", row)));
                }
                col += skip as i32;
            } else {
                let piece = Piece::from_fen_char(ch)
                    .ok_or_else(|| RuleError::InvalidFen(format!("invalid piece char: {}", ch)))?;
                col += 1;
                let pos = Position::new(row, col).map_err(|_| {
                    RuleError::InvalidFen(format!("row {} is longer than 9 columns", row))
                })?;
                board.place(pos, piece);
            }
        }

        if col != BOARD_COLS as i32 {
            return Err(RuleError::InvalidFen(format!(
                "row {} has {} columns, expected {}",
                row, col, BOARD_COLS
            )));
        }
    }

    Ok(board)
}

/// 生成 FEN 棋盘串
pub fn board_to_fen(board: &Board) -> String {
    let mut ranks = Vec::with_capacity(BOARD_ROWS as usize);

    for row in (1..=BOARD_ROWS as i32).rev() {
        let mut rank = String::new();
        let mut empty_count = 0;

        for col in 1..=BOARD_COLS as i32 {
            let piece = Position::new(row, col).ok().and_then(|pos| board.get(pos));
            match piece {
                Some(piece) => {
                    if empty_count > 0 {
                        rank.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    rank.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            rank.push_str(&empty_count.to_string());
        }
        ranks.push(rank);
    }

    ranks.join("/")
}
