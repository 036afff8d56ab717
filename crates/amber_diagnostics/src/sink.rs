//! DiagnosticSink - 诊断收集器
//!
//! 收集一次解析过程中产出的所有语法诊断

use crate::diagnostic::SyntaxDiagnostic;
use crate::level::DiagnosticLevel;
use crate::span::Span;

/// 诊断收集器
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    /// 收集的诊断列表（按产出顺序）
    diagnostics: Vec<SyntaxDiagnostic>,
    /// 是否有错误
    has_errors: bool,
}

impl DiagnosticSink {
    /// 创建新的诊断收集器
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            has_errors: false,
        }
    }

    /// 添加诊断
    pub fn add(&mut self, diagnostic: SyntaxDiagnostic) {
        if diagnostic.level.is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// 添加错误
    pub fn error(&mut self, message: impl Into<String>, span: Span) {
        self.add(SyntaxDiagnostic::error(message, span));
    }

    /// 添加警告
    pub fn warning(&mut self, message: impl Into<String>, span: Span) {
        self.add(SyntaxDiagnostic::warning(message, span));
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// 获取所有诊断
    pub fn diagnostics(&self) -> &[SyntaxDiagnostic] {
        &self.diagnostics
    }

    /// 获取错误数量
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// 获取警告数量
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.level, DiagnosticLevel::Warning))
            .count()
    }

    /// 获取诊断数量
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
