//! Position - 坐标换算
//!
//! 三套坐标系统在这里汇合：
//! - 解析器：字节偏移（经 [`LineIndex`] 换算为 1-based 行列）
//! - 分析器：1-based 行号，0 为未知/整文件哨兵
//! - 协议：0-based 行号 + 列
//!
//! 列保持分析器的原生字节单位，不做 UTF-16 换算——
//! 分析器上报的列单位与客户端期望一致，这是刻意保留的兼容约定。

use amber_diagnostics::LineIndex;
use tower_lsp::lsp_types::{Position, Range};

/// 整行区间使用的最大列哨兵
///
/// 用哨兵而非真实行长，省去查行长的开销；
/// 代价是高亮会多选行尾空白，对诊断展示可以接受。
pub const MAX_COLUMN: u32 = u32::MAX;

/// 把字节偏移换算为协议位置
pub fn to_position(index: &LineIndex, offset: usize) -> Position {
    let (line, col) = index.line_col(offset);
    Position::new(line - 1, col)
}

/// 归一化分析器上报的 1-based 行号
///
/// 哨兵 `0` 表示未知/整文件，不能递减（会下溢）。
pub fn normalize_line(line: u32) -> u32 {
    if line == 0 { 0 } else { line - 1 }
}

/// 覆盖一整行的区间
pub fn whole_line_range(line: u32) -> Range {
    Range::new(Position::new(line, 0), Position::new(line, MAX_COLUMN))
}
