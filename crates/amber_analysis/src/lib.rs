//! Amber Analysis
//!
//! 全量分析管线（顶层求值 + 类型推导）的结果模型。
//! 本 crate 只定义结果的形状：管线如何产出这些报告不在此处。
//!
//! # 核心类型
//!
//! - [`AnalysisResult`] - 一次完整分析的结果
//! - [`ToplevelErrorReport`] - 顶层求值错误报告
//! - [`InferenceErrorReport`] - 类型推导错误报告（带调用栈帧）
//! - [`ModuleRewriter`] - 影子模块名重写器（消息后处理）

pub mod report;
pub mod result;
pub mod rewrite;

pub use report::{Frame, InferenceErrorReport, InferenceKind, ToplevelErrorKind, ToplevelErrorReport};
pub use result::AnalysisResult;
pub use rewrite::ModuleRewriter;
