//! State - 分析缓存与活动文档
//!
//! 缓存把文档映射到与它相关的分析单元集合。
//! 条目只做整体替换，读取方拿到的是 `Arc` 快照，
//! 聚合期间条目被并发替换也不会读到撕裂状态。

use std::collections::HashMap;
use std::sync::Arc;

use amber_analysis::AnalysisResult;
use amber_syntax::ParseResult;
use tower_lsp::lsp_types::{Diagnostic, Url};

use crate::convert;
use crate::resolve::DocumentResolver;

/// 一次完整分析在协议层的投影
///
/// 归一化在分析完成时一次性做完；此后单元只读。
#[derive(Debug)]
pub struct AnalysisUnit {
    /// 入口文档
    origin: Option<Url>,
    /// 按归属文档分桶的诊断
    diagnostics: HashMap<Url, Vec<Diagnostic>>,
    /// 本次分析覆盖的文档（含零诊断者）
    covered: Vec<Url>,
}

impl AnalysisUnit {
    /// 归一化一次分析结果
    pub fn from_result(result: &AnalysisResult, resolver: &DocumentResolver) -> Self {
        let diagnostics = convert::bucket(result, resolver);
        let origin = resolver.resolve(result.origin.as_deref());

        let mut covered: Vec<Url> = result
            .analyzed_files
            .iter()
            .filter_map(|file| resolver.resolve(Some(file)))
            .collect();
        covered.dedup();
        // 诊断归属到的文档也算被覆盖（跨文件归属）
        for uri in diagnostics.keys() {
            if !covered.contains(uri) {
                covered.push(uri.clone());
            }
        }

        Self {
            origin,
            diagnostics,
            covered,
        }
    }

    /// 入口文档
    pub fn origin(&self) -> Option<&Url> {
        self.origin.as_ref()
    }

    /// 覆盖的文档
    pub fn covered(&self) -> &[Url] {
        &self.covered
    }

    /// 该单元归属到指定文档的诊断（内部顺序即产出顺序）
    pub fn diagnostics_for(&self, uri: &Url) -> &[Diagnostic] {
        self.diagnostics
            .get(uri)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 单元是否涉及指定文档
    pub fn references(&self, uri: &Url) -> bool {
        self.covered.contains(uri)
    }
}

/// 缓存条目
#[derive(Debug, Clone)]
pub enum CacheEntry {
    /// 文档不参与全量分析
    OutOfScope,
    /// 与该文档相关的分析单元，按记录顺序
    Units(Vec<Arc<AnalysisUnit>>),
}

/// 分析缓存
///
/// 只由分析管线在一次分析完成时写入；诊断子系统只读。
#[derive(Debug, Default)]
pub struct AnalysisCache {
    entries: HashMap<Url, CacheEntry>,
}

impl AnalysisCache {
    /// 创建空缓存
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次完成的分析
    ///
    /// 单元覆盖的每个文档条目都被替换式更新：
    /// 同一入口的旧单元移除，新单元追加。不同入口的单元共存，
    /// 所以两个脚本可以同时向一个共享文档贡献诊断。
    pub fn record(&mut self, unit: Arc<AnalysisUnit>) {
        for uri in unit.covered() {
            let entry = self
                .entries
                .entry(uri.clone())
                .or_insert_with(|| CacheEntry::Units(Vec::new()));
            match entry {
                CacheEntry::Units(units) => {
                    units.retain(|existing| existing.origin() != unit.origin());
                    units.push(unit.clone());
                }
                CacheEntry::OutOfScope => {
                    // 分析管线显式覆盖了越权标记
                    *entry = CacheEntry::Units(vec![unit.clone()]);
                }
            }
        }
    }

    /// 标记文档不参与全量分析
    pub fn mark_out_of_scope(&mut self, uri: Url) {
        self.entries.insert(uri, CacheEntry::OutOfScope);
    }

    /// 文档关闭时尝试移除条目
    ///
    /// 其他文档条目中的单元仍引用该文档时保留。
    pub fn evict(&mut self, uri: &Url) {
        let referenced_elsewhere = self.entries.iter().any(|(key, entry)| {
            key != uri
                && matches!(entry, CacheEntry::Units(units)
                    if units.iter().any(|unit| unit.references(uri)))
        });
        if !referenced_elsewhere {
            self.entries.remove(uri);
        }
    }

    /// 文档是否有分析单元条目
    pub fn has_units(&self, uri: &Url) -> bool {
        matches!(self.entries.get(uri), Some(CacheEntry::Units(_)))
    }

    /// 聚合文档的全量诊断
    ///
    /// 无条目与越权条目都返回空——"尚未分析"与"分析后无问题"
    /// 对客户端不可区分。各单元的诊断保持内部顺序且互不交错。
    pub fn full_diagnostics(&self, uri: &Url) -> Vec<Diagnostic> {
        match self.entries.get(uri) {
            None | Some(CacheEntry::OutOfScope) => Vec::new(),
            Some(CacheEntry::Units(units)) => units
                .iter()
                .flat_map(|unit| unit.diagnostics_for(uri).iter().cloned())
                .collect(),
        }
    }

    /// 参与推送扫描的文档（排除越权条目），按 URI 排序保证扫描顺序稳定
    pub fn published_documents(&self) -> Vec<Url> {
        let mut documents: Vec<Url> = self
            .entries
            .iter()
            .filter(|(_, entry)| matches!(entry, CacheEntry::Units(_)))
            .map(|(uri, _)| uri.clone())
            .collect();
        documents.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        documents
    }
}

/// 活动文档存储：打开文档的最新解析状态
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<Url, ParseResult>,
}

impl DocumentStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开或更新文档
    pub fn update(&mut self, uri: Url, parse: ParseResult) {
        self.documents.insert(uri, parse);
    }

    /// 关闭文档
    pub fn close(&mut self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// 获取活动解析状态
    pub fn get(&self, uri: &Url) -> Option<&ParseResult> {
        self.documents.get(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amber_analysis::{Frame, InferenceErrorReport, InferenceKind, ToplevelErrorReport};
    use std::path::PathBuf;

    fn resolver() -> DocumentResolver {
        DocumentResolver::new(PathBuf::from("/workspace"))
    }

    fn uri(name: &str) -> Url {
        Url::parse(&format!("file:///workspace/{name}")).unwrap()
    }

    fn unit_with(origin: &str, reports: Vec<(&str, u32, &str)>) -> Arc<AnalysisUnit> {
        let mut result = AnalysisResult::new(origin);
        for (file, line, message) in reports {
            result.inference_reports.push(InferenceErrorReport::new(
                InferenceKind::Definite,
                message,
                vec![Frame::new(Some(file.into()), line, "f")],
            ));
            if !result.analyzed_files.iter().any(|f| f == file) {
                result.add_analyzed_file(file);
            }
        }
        Arc::new(AnalysisUnit::from_result(&result, &resolver()))
    }

    #[test]
    fn test_missing_entry_is_empty() {
        let cache = AnalysisCache::new();
        assert!(cache.full_diagnostics(&uri("unknown.am")).is_empty());
    }

    #[test]
    fn test_out_of_scope_is_empty_and_unpublished() {
        let mut cache = AnalysisCache::new();
        cache.mark_out_of_scope(uri("config.am"));

        assert!(cache.full_diagnostics(&uri("config.am")).is_empty());
        assert!(cache.published_documents().is_empty());
    }

    #[test]
    fn test_two_units_contiguous_in_order() {
        let mut cache = AnalysisCache::new();
        cache.record(unit_with(
            "script1.am",
            vec![("shared.am", 1, "u1-a"), ("shared.am", 2, "u1-b")],
        ));
        cache.record(unit_with("script2.am", vec![("shared.am", 3, "u2-a")]));

        let diagnostics = cache.full_diagnostics(&uri("shared.am"));
        let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        // 每个单元的诊断连续且保持内部顺序，单元之间不交错
        assert_eq!(messages, vec!["u1-a", "u1-b", "u2-a"]);
    }

    #[test]
    fn test_reanalysis_replaces_same_origin() {
        let mut cache = AnalysisCache::new();
        cache.record(unit_with("main.am", vec![("main.am", 1, "old")]));
        cache.record(unit_with("main.am", vec![("main.am", 2, "new")]));

        let diagnostics = cache.full_diagnostics(&uri("main.am"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "new");
    }

    #[test]
    fn test_reanalysis_keeps_other_origin() {
        let mut cache = AnalysisCache::new();
        cache.record(unit_with("script1.am", vec![("shared.am", 1, "from-1")]));
        cache.record(unit_with("script2.am", vec![("shared.am", 2, "from-2")]));
        // 重新分析 script1：只替换它自己的单元
        cache.record(unit_with("script1.am", vec![("shared.am", 3, "from-1-v2")]));

        let messages: Vec<String> = cache
            .full_diagnostics(&uri("shared.am"))
            .into_iter()
            .map(|d| d.message)
            .collect();
        assert!(messages.contains(&"from-2".to_string()));
        assert!(messages.contains(&"from-1-v2".to_string()));
        assert!(!messages.contains(&"from-1".to_string()));
    }

    #[test]
    fn test_evict_removes_unreferenced() {
        let mut cache = AnalysisCache::new();
        cache.record(unit_with("main.am", vec![("main.am", 1, "e")]));

        cache.evict(&uri("main.am"));
        assert!(!cache.has_units(&uri("main.am")));
    }

    #[test]
    fn test_evict_keeps_entry_referenced_elsewhere() {
        let mut cache = AnalysisCache::new();
        // script.am 的分析覆盖了 shared.am
        cache.record(unit_with("script.am", vec![("shared.am", 1, "e")]));

        // 关闭 shared.am：script.am 条目中的单元仍引用它，条目保留
        cache.evict(&uri("shared.am"));
        assert!(cache.has_units(&uri("shared.am")));
        assert_eq!(cache.full_diagnostics(&uri("shared.am")).len(), 1);
    }

    #[test]
    fn test_units_with_zero_diagnostics_still_published() {
        let mut cache = AnalysisCache::new();
        cache.record(unit_with("clean.am", vec![]));

        assert!(cache.has_units(&uri("clean.am")));
        assert_eq!(cache.published_documents(), vec![uri("clean.am")]);
        assert!(cache.full_diagnostics(&uri("clean.am")).is_empty());
    }

    #[test]
    fn test_toplevel_and_inference_share_bucket() {
        let mut result = AnalysisResult::new("main.am");
        result
            .toplevel_reports
            .push(ToplevelErrorReport::eval(Some("main.am".into()), 1, "t"));
        result.inference_reports.push(InferenceErrorReport::new(
            InferenceKind::Possible,
            "i",
            vec![Frame::new(Some("main.am".into()), 2, "f")],
        ));
        let unit = Arc::new(AnalysisUnit::from_result(&result, &resolver()));

        assert_eq!(unit.diagnostics_for(&uri("main.am")).len(), 2);
        assert!(unit.references(&uri("main.am")));
    }

    #[test]
    fn test_document_store_lifecycle() {
        let mut store = DocumentStore::new();
        let doc = uri("open.am");

        assert!(store.get(&doc).is_none());
        store.update(doc.clone(), amber_syntax::parse("let x = @"));
        assert!(store.get(&doc).unwrap().has_errors());

        store.close(&doc);
        assert!(store.get(&doc).is_none());
    }
}
