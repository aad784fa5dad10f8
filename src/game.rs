//! 对局控制
//!
//! 把走法请求分派给对应的棋子规则，合法则落子，并在吃掉将时结束对局。
//! 每个 [`Game`] 独立持有自己的棋盘，没有全局状态。

use log::{debug, info};

use crate::board::Board;
use crate::error::RuleResult;
use crate::fen::{board_to_fen, parse_board};
use crate::rules::is_valid_move;
use crate::types::{Color, Piece, PieceType, Position};

/// 对局状态：结束标志与胜方
///
/// 一旦结束便不再改变，只有 [`Game::initialize_board`] 会重置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    pub game_over: bool,
    pub winner: Option<Color>,
}

/// 一局棋
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    /// 空棋盘的新对局
    pub fn new() -> Self {
        Game::default()
    }

    /// 从 FEN 棋盘串创建对局
    pub fn from_fen(fen: &str) -> RuleResult<Game> {
        Ok(Game {
            board: parse_board(fen)?,
            state: GameState::default(),
        })
    }

    pub fn to_fen(&self) -> String {
        board_to_fen(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// 清空棋盘并重置对局状态
    pub fn initialize_board(&mut self) {
        self.board.clear();
        self.state = GameState::default();
    }

    /// 直接摆子，不做任何合法性检查（用于布局）
    pub fn place_piece(&mut self, color: Color, kind: PieceType, position: Position) {
        self.board.place(position, Piece::new(color, kind));
    }

    /// 以行列号摆子，坐标越界时报错
    pub fn place_piece_at(
        &mut self,
        color: Color,
        kind: PieceType,
        row: i32,
        col: i32,
    ) -> RuleResult<()> {
        self.place_piece(color, kind, Position::new(row, col)?);
        Ok(())
    }

    /// 只判断走法是否合法，不落子
    pub fn is_legal_move(
        &self,
        color: Color,
        kind: PieceType,
        from: Position,
        to: Position,
    ) -> bool {
        if self.board.get(from) != Some(Piece::new(color, kind)) {
            debug!("{} {} is not at {}", color, kind, from);
            return false;
        }
        if !is_valid_move(&self.board, kind, color, from, to) {
            debug!("illegal {} {} move {} -> {}", color, kind, from, to);
            return false;
        }
        if self.board.get(to).map_or(false, |target| target.color == color) {
            debug!("{} {} cannot capture own piece at {}", color, kind, to);
            return false;
        }
        true
    }

    /// 走子
    ///
    /// 非法时返回 false，棋盘不变。合法时落子，吃掉将则结束对局。
    pub fn move_piece(
        &mut self,
        color: Color,
        kind: PieceType,
        from: Position,
        to: Position,
    ) -> bool {
        if !self.is_legal_move(color, kind, from, to) {
            return false;
        }

        self.board.remove(from);
        let captured = self.board.place(to, Piece::new(color, kind));
        debug!("{} {} {} -> {}", color, kind, from, to);

        if let Some(captured) = captured {
            self.on_capture(color, captured);
        }
        true
    }

    /// 以行列号走子，坐标越界时报错
    pub fn move_piece_at(
        &mut self,
        kind: PieceType,
        color: Color,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> RuleResult<bool> {
        let from = Position::new(from_row, from_col)?;
        let to = Position::new(to_row, to_col)?;
        Ok(self.move_piece(color, kind, from, to))
    }

    pub fn move_general(&mut self, color: Color, from: Position, to: Position) -> bool {
        self.move_piece(color, PieceType::General, from, to)
    }

    pub fn move_guard(&mut self, color: Color, from: Position, to: Position) -> bool {
        self.move_piece(color, PieceType::Guard, from, to)
    }

    pub fn move_rook(&mut self, color: Color, from: Position, to: Position) -> bool {
        self.move_piece(color, PieceType::Rook, from, to)
    }

    pub fn move_horse(&mut self, color: Color, from: Position, to: Position) -> bool {
        self.move_piece(color, PieceType::Horse, from, to)
    }

    pub fn move_cannon(&mut self, color: Color, from: Position, to: Position) -> bool {
        self.move_piece(color, PieceType::Cannon, from, to)
    }

    pub fn move_soldier(&mut self, color: Color, from: Position, to: Position) -> bool {
        self.move_piece(color, PieceType::Soldier, from, to)
    }

    pub fn move_elephant(&mut self, color: Color, from: Position, to: Position) -> bool {
        self.move_piece(color, PieceType::Elephant, from, to)
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// 胜方，未结束时为 None
    pub fn winner(&self) -> Option<Color> {
        self.state.winner
    }

    fn on_capture(&mut self, mover: Color, captured: Piece) {
        debug!("{} captured {}", mover, captured);
        if !captured.is_general() || self.state.game_over {
            return;
        }
        self.state = GameState {
            game_over: true,
            winner: Some(captured.color.opposite()),
        };
        info!("{} General captured, {} wins", captured.color, mover);
    }
}
