//! AnalysisResult - 一次完整分析的结果
//!
//! 一次分析从一个入口文档出发，可能覆盖多个文档
//! （被 import 的依赖也会被装载和推导）。

use crate::report::{InferenceErrorReport, ToplevelErrorReport};
use crate::rewrite::ModuleRewriter;

/// 一次完整分析（顶层求值 + 类型推导）的结果
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    /// 入口文档的文件名
    pub origin: Option<String>,
    /// 本次分析覆盖到的所有文档
    pub analyzed_files: Vec<String>,
    /// 顶层求值错误
    pub toplevel_reports: Vec<ToplevelErrorReport>,
    /// 类型推导错误
    pub inference_reports: Vec<InferenceErrorReport>,
    /// 消息后处理器
    pub rewriter: ModuleRewriter,
}

impl AnalysisResult {
    /// 创建以 `origin` 为入口的空结果
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            analyzed_files: vec![origin.clone()],
            origin: Some(origin),
            ..Default::default()
        }
    }

    /// 记录一个被覆盖的文档
    pub fn add_analyzed_file(&mut self, file: impl Into<String>) {
        self.analyzed_files.push(file.into());
    }

    /// 顶层求值错误报告
    pub fn toplevel_error_reports(&self) -> &[ToplevelErrorReport] {
        &self.toplevel_reports
    }

    /// 类型推导错误报告
    pub fn inference_error_reports(&self) -> &[InferenceErrorReport] {
        &self.inference_reports
    }

    /// 是否没有任何报告
    pub fn is_clean(&self) -> bool {
        self.toplevel_reports.is_empty() && self.inference_reports.is_empty()
    }
}
