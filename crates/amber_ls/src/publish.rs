//! Publish - 发布层
//!
//! 两种投递协议共享同一个逻辑视图：
//! - 推送扫描：服务器主动为每个有缓存条目的文档发布全量诊断
//! - 拉取：客户端按文档请求，只回答语法层诊断（见 lib.rs 的处理器）

use amber_syntax::ParseResult;
use tower_lsp::lsp_types::{Diagnostic, Url};

use crate::convert;
use crate::state::AnalysisCache;

/// 计算一次推送扫描的载荷
///
/// 每个非越权条目一项，空诊断列表也包含在内——
/// 之前有错误而现在没有的文档必须收到空列表来清除旧显示。
/// 单个文档的诊断永远完整地出现在同一项里，不跨项拆分。
pub fn push_sweep(cache: &AnalysisCache) -> Vec<(Url, Vec<Diagnostic>)> {
    cache
        .published_documents()
        .into_iter()
        .map(|uri| {
            let diagnostics = cache.full_diagnostics(&uri);
            (uri, diagnostics)
        })
        .collect()
}

/// 仅语法快速路径
///
/// 只依赖活动解析状态，完全绕开缓存；
/// 全量分析未完成时也能立即响应。
pub fn syntax_only(parse: &ParseResult) -> Vec<Diagnostic> {
    convert::syntax_diagnostics(parse)
}
