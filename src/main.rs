//! Xiangqi Rules CLI
//!
//! 命令行界面，用于检查走法、回放走法和订单计价
//!
//! 支持两种模式：
//! 1. 单次命令模式：每次执行一个命令
//! 2. Server 模式：长驻进程，通过 stdin/stdout 通信

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufRead, Write};
use xiangqi_rules::pricing::OrderItem;
use xiangqi_rules::{test_positions, Color, Game, OrderService, PieceType, Position, PromotionConfig};

#[derive(Parser)]
#[command(name = "xiangqi-rules")]
#[command(about = "Xiangqi move legality engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 检查走法是否合法（不落子）
    Check {
        /// FEN 棋盘串或命名局面（如 OPENING）
        #[arg(long)]
        fen: String,

        /// 阵营 (red, black)
        #[arg(long)]
        color: String,

        /// 棋子 (general, guard, rook, horse, cannon, soldier, elephant)
        #[arg(long)]
        piece: String,

        /// 起点（如 a0）
        #[arg(long)]
        from: String,

        /// 终点（如 a9）
        #[arg(long)]
        to: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 依次执行走法
    Play {
        /// FEN 棋盘串或命名局面
        #[arg(long)]
        fen: String,

        /// 走法，格式 "red rook a0a8"，可重复
        #[arg(long = "move")]
        moves: Vec<String>,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 订单计价，输入 JSON 文件
    Price {
        #[arg(long)]
        input: String,
    },

    /// 列出命名局面
    Positions,

    /// 启动 server 模式（stdin/stdout 通信）
    Server,
}

/// 一步走法
struct MoveSpec {
    color: Color,
    kind: PieceType,
    from: Position,
    to: Position,
}

impl MoveSpec {
    fn parse(s: &str) -> Result<MoveSpec, String> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 || parts[2].len() != 4 || !parts[2].is_ascii() {
            return Err(format!(
                "Invalid move: expected '<color> <piece> <from><to>', got: {}",
                s
            ));
        }
        let squares = parts[2];
        MoveSpec::from_parts(parts[0], parts[1], &squares[0..2], &squares[2..4])
    }

    fn from_parts(color: &str, piece: &str, from: &str, to: &str) -> Result<MoveSpec, String> {
        Ok(MoveSpec {
            color: color.parse().map_err(|e| format!("{}", e))?,
            kind: piece.parse().map_err(|e| format!("{}", e))?,
            from: Position::from_notation(from).map_err(|e| format!("{}", e))?,
            to: Position::from_notation(to).map_err(|e| format!("{}", e))?,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct MoveOutcome {
    #[serde(rename = "move")]
    mv: String,
    legal: bool,
}

#[derive(Serialize, Deserialize)]
struct PlayResponse {
    moves: Vec<MoveOutcome>,
    fen: String,
    game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    winner: Option<String>,
}

#[derive(Deserialize)]
struct PriceInput {
    #[serde(default)]
    promotions: PromotionConfig,
    items: Vec<OrderItem>,
}

// Server 模式的请求和响应结构
#[derive(Serialize, Deserialize)]
struct ServerRequest {
    cmd: String,
    #[serde(default)]
    fen: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    piece: Option<String>,
    #[serde(default)]
    square: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
struct ServerResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    legal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    game_over: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    winner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServerResponse {
    fn success_state(game: &Game) -> Self {
        Self {
            ok: true,
            fen: Some(game.to_fen()),
            game_over: Some(game.is_game_over()),
            winner: game.winner().map(|c| c.to_string()),
            ..Default::default()
        }
    }

    fn success_move(game: &Game, legal: bool) -> Self {
        Self {
            legal: Some(legal),
            ..Self::success_state(game)
        }
    }

    fn error(msg: &str) -> Self {
        Self {
            ok: false,
            error: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

/// 命名局面优先，否则按 FEN 解析
fn load_game(fen: &str) -> Result<Game, String> {
    let fen = test_positions::get(fen).unwrap_or(fen);
    Game::from_fen(fen).map_err(|e| format!("{}", e))
}

fn exit_with(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            fen,
            color,
            piece,
            from,
            to,
            json,
        } => {
            let game = load_game(&fen).unwrap_or_else(|e| exit_with(&e));
            let spec =
                MoveSpec::from_parts(&color, &piece, &from, &to).unwrap_or_else(|e| exit_with(&e));
            let legal = game.is_legal_move(spec.color, spec.kind, spec.from, spec.to);
            if json {
                println!("{{\"legal\": {}}}", legal);
            } else {
                println!(
                    "{} {} {} -> {}: {}",
                    spec.color,
                    spec.kind,
                    spec.from,
                    spec.to,
                    if legal { "legal" } else { "illegal" }
                );
            }
        }

        Commands::Play { fen, moves, json } => {
            let mut game = load_game(&fen).unwrap_or_else(|e| exit_with(&e));
            let mut outcomes = Vec::with_capacity(moves.len());
            for mv in moves {
                let spec = MoveSpec::parse(&mv).unwrap_or_else(|e| exit_with(&e));
                let legal = game.move_piece(spec.color, spec.kind, spec.from, spec.to);
                outcomes.push(MoveOutcome { mv, legal });
            }

            let response = PlayResponse {
                moves: outcomes,
                fen: game.to_fen(),
                game_over: game.is_game_over(),
                winner: game.winner().map(|c| c.to_string()),
            };
            if json {
                match serde_json::to_string_pretty(&response) {
                    Ok(s) => println!("{}", s),
                    Err(e) => exit_with(&e.to_string()),
                }
            } else {
                for outcome in &response.moves {
                    let verdict = if outcome.legal { "ok" } else { "illegal" };
                    println!("  {} ({})", outcome.mv, verdict);
                }
                println!("\nFEN: {}", response.fen);
                match &response.winner {
                    Some(w) => println!("Game over, winner: {}", w),
                    None => println!("Game in progress"),
                }
            }
        }

        Commands::Price { input } => {
            let text = fs::read_to_string(&input)
                .unwrap_or_else(|e| exit_with(&format!("{}: {}", input, e)));
            let parsed: PriceInput = serde_json::from_str(&text)
                .unwrap_or_else(|e| exit_with(&format!("Invalid JSON: {}", e)));

            let mut order = OrderService::with_config(parsed.promotions);
            for item in parsed.items {
                order.add_product(item.product, item.quantity);
            }
            match serde_json::to_string_pretty(&order.calculate_order()) {
                Ok(s) => println!("{}", s),
                Err(e) => exit_with(&e.to_string()),
            }
        }

        Commands::Positions => {
            for (name, fen) in test_positions::ALL {
                println!("{:<20} {}", name, fen);
            }
        }

        Commands::Server => {
            run_server();
        }
    }
}

/// Server 模式主循环
/// 从 stdin 读取 JSON 请求，返回 JSON 响应到 stdout
fn run_server() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut game = Game::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        // 空行跳过
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ServerRequest>(&line) {
            Ok(request) => match request.cmd.as_str() {
                "init" => handle_init_request(&mut game, &request),
                "place" => handle_place_request(&mut game, &request),
                "move" => handle_move_request(&mut game, &request),
                "state" => ServerResponse::success_state(&game),
                "quit" => break,
                _ => ServerResponse::error(&format!("Unknown command: {}", request.cmd)),
            },
            Err(e) => ServerResponse::error(&format!("Invalid JSON: {}", e)),
        };

        match serde_json::to_string(&response) {
            Ok(s) => println!("{}", s),
            Err(e) => log::error!("failed to encode response: {}", e),
        }
        let _ = stdout.flush();
    }
}

fn required<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str, String> {
    field
        .as_deref()
        .ok_or_else(|| format!("Missing field: {}", name))
}

/// 处理 init 命令：无 fen 时清空棋盘
fn handle_init_request(game: &mut Game, request: &ServerRequest) -> ServerResponse {
    match &request.fen {
        Some(fen) => match load_game(fen) {
            Ok(g) => *game = g,
            Err(e) => return ServerResponse::error(&e),
        },
        None => game.initialize_board(),
    }
    ServerResponse::success_state(game)
}

/// 处理 place 命令
fn handle_place_request(game: &mut Game, request: &ServerRequest) -> ServerResponse {
    let result = (|| -> Result<(), String> {
        let color: Color = required(&request.color, "color")?
            .parse()
            .map_err(|e| format!("{}", e))?;
        let kind: PieceType = required(&request.piece, "piece")?
            .parse()
            .map_err(|e| format!("{}", e))?;
        let square = Position::from_notation(required(&request.square, "square")?)
            .map_err(|e| format!("{}", e))?;
        game.place_piece(color, kind, square);
        Ok(())
    })();

    match result {
        Ok(()) => ServerResponse::success_state(game),
        Err(e) => ServerResponse::error(&e),
    }
}

/// 处理 move 命令
fn handle_move_request(game: &mut Game, request: &ServerRequest) -> ServerResponse {
    let spec = (|| -> Result<MoveSpec, String> {
        MoveSpec::from_parts(
            required(&request.color, "color")?,
            required(&request.piece, "piece")?,
            required(&request.from, "from")?,
            required(&request.to, "to")?,
        )
    })();

    match spec {
        Ok(spec) => {
            let legal = game.move_piece(spec.color, spec.kind, spec.from, spec.to);
            ServerResponse::success_move(game, legal)
        }
        Err(e) => ServerResponse::error(&e),
    }
}
