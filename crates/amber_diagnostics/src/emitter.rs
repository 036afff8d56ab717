//! Emitter - 诊断输出器
//!
//! 负责把语法诊断格式化输出到终端（CLI `check` 使用）

use crate::diagnostic::SyntaxDiagnostic;
use crate::line_index::LineIndex;
use crate::span::SpanExt;
use colored::*;

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建新的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出单个诊断
    ///
    /// `file` 用于位置行的展示，`index` 把字节区间换算为行列。
    pub fn emit(&self, file: &str, index: &LineIndex, diagnostic: &SyntaxDiagnostic) {
        let (line, col) = index.line_col(diagnostic.span.start());

        if self.use_colors {
            println!(
                "{}: {}",
                diagnostic.level.colored_name(),
                diagnostic.message.bold()
            );
            println!("  {} {}:{}:{}", "-->".blue().bold(), file, line, col + 1);
        } else {
            println!("{}: {}", diagnostic.level, diagnostic.message);
            println!("  --> {}:{}:{}", file, line, col + 1);
        }
    }

    /// 输出所有诊断
    pub fn emit_all(&self, file: &str, index: &LineIndex, diagnostics: &[SyntaxDiagnostic]) {
        for diagnostic in diagnostics {
            self.emit(file, index, diagnostic);
            println!(); // 诊断之间空行
        }
    }
}
