//! Xiangqi Rules Engine
//!
//! 象棋走法合法性引擎 - 支持 FEN 布局、飞将检测与吃将判负

pub mod board;
pub mod check;
pub mod error;
pub mod fen;
pub mod game;
pub mod pricing;
pub mod rules;
pub mod test_positions;
pub mod types;

pub use board::Board;
pub use error::{RuleError, RuleResult};
pub use fen::{board_to_fen, parse_board};
pub use game::{Game, GameState};
pub use pricing::{OrderService, OrderSummary, Product, PromotionConfig};
pub use rules::{is_valid_move, rule_for, PieceRule};
pub use types::{Color, Piece, PieceType, Position};
