//! 测试局面库
//!
//! 提供命名的 FEN 棋盘串，方便测试、基准和调试

/// 空棋盘
pub const EMPTY: &str = "9/9/9/9/9/9/9/9/9/9";

/// 标准开局
pub const OPENING: &str = "rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR";

/// 只有红帅 (1,5)
pub const LONE_RED_GENERAL: &str = "9/9/9/9/9/9/9/9/9/4K4";

/// 将帅同列，中间无子
pub const FACING_GENERALS: &str = "4k4/9/9/9/9/9/9/9/9/4K4";

/// 红车 (1,1) 可直接吃黑将 (1,9)
pub const ROOK_TAKES_GENERAL: &str = "9/9/9/9/9/9/9/9/9/R7k";

/// 红炮 (1,1)，炮架 (1,5)，黑将 (1,9)
pub const CANNON_ONE_SCREEN: &str = "9/9/9/9/9/9/9/9/9/C3p3k";

/// 同上，(1,7) 多一个子
pub const CANNON_TWO_SCREENS: &str = "9/9/9/9/9/9/9/9/9/C3p1p1k";

/// 残局：双方九宫各有将士，红兵已过河
pub const ENDGAME: &str = "3ak4/4a4/9/9/4P4/9/9/9/4A4/3AK4";

/// 所有命名局面
pub const ALL: &[(&str, &str)] = &[
    ("EMPTY", EMPTY),
    ("OPENING", OPENING),
    ("LONE_RED_GENERAL", LONE_RED_GENERAL),
    ("FACING_GENERALS", FACING_GENERALS),
    ("ROOK_TAKES_GENERAL", ROOK_TAKES_GENERAL),
    ("CANNON_ONE_SCREEN", CANNON_ONE_SCREEN),
    ("CANNON_TWO_SCREENS", CANNON_TWO_SCREENS),
    ("ENDGAME", ENDGAME),
];

/// 按名称查找局面
pub fn get(name: &str) -> Option<&'static str> {
    ALL.iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, fen)| *fen)
}
