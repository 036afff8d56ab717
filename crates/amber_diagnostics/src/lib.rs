//! Amber Diagnostics
//!
//! 统一的诊断模型，为 Amber 前端与语言服务器提供语法诊断的基础类型。
//!
//! # 核心类型
//!
//! - [`SyntaxDiagnostic`] - 语法诊断记录（字节区间 + 级别 + 消息）
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Info/Note）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`LineIndex`] - 字节偏移到行列的映射
//! - [`Emitter`] - 终端输出器
//! - [`Span`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use amber_diagnostics::{DiagnosticSink, LineIndex, SyntaxDiagnostic};
//!
//! let source = "let x = @";
//! let index = LineIndex::new(source);
//!
//! let mut sink = DiagnosticSink::new();
//! sink.add(SyntaxDiagnostic::error("unexpected character `@`", 8..9));
//!
//! assert!(sink.has_errors());
//! assert_eq!(index.line_col(8), (1, 8));
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod line_index;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::SyntaxDiagnostic;
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use line_index::LineIndex;
pub use sink::DiagnosticSink;
pub use span::{Span, SpanExt};
