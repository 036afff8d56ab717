//! SyntaxDiagnostic - 语法诊断
//!
//! 解析器产出的单条诊断：级别、消息与源码字节区间。
//! 构造后即为不可变的值记录。

use crate::level::DiagnosticLevel;
use crate::span::Span;

/// 语法诊断记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDiagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 源码字节区间
    pub span: Span,
}

impl SyntaxDiagnostic {
    /// 创建新的诊断
    pub fn new(level: DiagnosticLevel, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
        }
    }

    /// 创建错误诊断
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(DiagnosticLevel::Error, message, span)
    }

    /// 创建警告诊断
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(DiagnosticLevel::Warning, message, span)
    }

    /// 创建注释诊断
    pub fn note(message: impl Into<String>, span: Span) -> Self {
        Self::new(DiagnosticLevel::Note, message, span)
    }
}
