//! Convert - 诊断归一化
//!
//! 把三个分析阶段的原始报告转换为协议诊断。
//! 三个阶段各有一个固定的 source 标签，客户端用它分组过滤。

use std::collections::HashMap;

use amber_analysis::{AnalysisResult, InferenceErrorReport, ModuleRewriter, ToplevelErrorKind, ToplevelErrorReport};
use amber_diagnostics::{DiagnosticLevel, LineIndex, SpanExt, SyntaxDiagnostic};
use amber_syntax::ParseResult;
use tower_lsp::lsp_types::{
    Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, Location, Range, Url,
};

use crate::position::{normalize_line, to_position, whole_line_range};
use crate::resolve::DocumentResolver;

/// 解析阶段的 source 标签
pub const SOURCE_SYNTAX: &str = "syntax";
/// 顶层求值阶段的 source 标签
pub const SOURCE_TOPLEVEL: &str = "toplevel";
/// 类型推导阶段的 source 标签
pub const SOURCE_INFERENCE: &str = "inference";

/// 原始报告的封闭集合
///
/// 语法诊断来自解析器（附带所属源文本），其余两种来自全量分析。
pub enum RawReport<'a> {
    /// 语法诊断：所属源文本 + 诊断记录
    Syntax(&'a str, &'a SyntaxDiagnostic),
    /// 顶层求值错误
    Toplevel(&'a ToplevelErrorReport),
    /// 类型推导错误
    Inference(&'a InferenceErrorReport),
}

/// 单次分派：把一条原始报告归一化为一条协议诊断
///
/// 返回 `None` 仅当报告无法定位（推导报告没有任何栈帧）。
/// 报告归属到哪个文档由 [`bucket`] 决定，这里只产出诊断本体。
pub fn normalize(
    report: &RawReport,
    rewriter: &ModuleRewriter,
    resolver: &DocumentResolver,
) -> Option<Diagnostic> {
    match report {
        RawReport::Syntax(source, diagnostic) => {
            Some(syntax_diagnostic(&LineIndex::new(source), diagnostic))
        }

        RawReport::Toplevel(toplevel) => match &toplevel.kind {
            // 装载时的解析失败整体委托给语法转换
            ToplevelErrorKind::Parse { source, diagnostic } => {
                normalize(&RawReport::Syntax(source, diagnostic), rewriter, resolver)
            }
            ToplevelErrorKind::Eval { message } => Some(Diagnostic {
                range: whole_line_range(normalize_line(toplevel.line)),
                severity: Some(DiagnosticSeverity::ERROR),
                source: Some(SOURCE_TOPLEVEL.to_string()),
                message: rewriter.process(message),
                ..Default::default()
            }),
        },

        RawReport::Inference(inference) => {
            let primary = inference.frames.first()?;
            let related: Vec<DiagnosticRelatedInformation> = inference
                .frames
                .iter()
                .skip(1)
                .filter_map(|frame| {
                    // 不可定位的帧整个跳过
                    let uri = resolver.resolve(frame.file.as_deref())?;
                    Some(DiagnosticRelatedInformation {
                        location: Location {
                            uri,
                            range: whole_line_range(normalize_line(frame.line)),
                        },
                        message: frame.render_signature(),
                    })
                })
                .collect();

            Some(Diagnostic {
                range: whole_line_range(normalize_line(primary.line)),
                severity: Some(protocol_severity(inference.severity())),
                source: Some(SOURCE_INFERENCE.to_string()),
                message: rewriter.process(&inference.message),
                related_information: if related.is_empty() {
                    None
                } else {
                    Some(related)
                },
                ..Default::default()
            })
        }
    }
}

/// 语法诊断的级别映射（固定表）
fn protocol_severity(level: DiagnosticLevel) -> DiagnosticSeverity {
    match level {
        DiagnosticLevel::Error => DiagnosticSeverity::ERROR,
        DiagnosticLevel::Warning => DiagnosticSeverity::WARNING,
        DiagnosticLevel::Note => DiagnosticSeverity::INFORMATION,
        _ => DiagnosticSeverity::HINT,
    }
}

/// 把一条语法诊断转换为协议诊断
pub fn syntax_diagnostic(index: &LineIndex, diagnostic: &SyntaxDiagnostic) -> Diagnostic {
    Diagnostic {
        range: Range::new(
            to_position(index, diagnostic.span.start()),
            to_position(index, diagnostic.span.end()),
        ),
        severity: Some(protocol_severity(diagnostic.level)),
        source: Some(SOURCE_SYNTAX.to_string()),
        message: diagnostic.message.clone(),
        ..Default::default()
    }
}

/// 把活动解析状态的全部语法诊断转换为协议诊断
pub fn syntax_diagnostics(parse: &ParseResult) -> Vec<Diagnostic> {
    parse
        .diagnostics()
        .iter()
        .map(|diagnostic| syntax_diagnostic(&parse.index, diagnostic))
        .collect()
}

/// 把一次分析结果的全部报告按归属文档分桶
///
/// 不可归属的报告（无文件名、或推导报告的首帧不可定位）被静默丢弃，
/// 这是预期中的常见情况，不记录为服务器错误。
pub fn bucket(
    result: &AnalysisResult,
    resolver: &DocumentResolver,
) -> HashMap<Url, Vec<Diagnostic>> {
    let mut buckets: HashMap<Url, Vec<Diagnostic>> = HashMap::new();

    for report in result.toplevel_error_reports() {
        let Some(uri) = resolver.resolve(report.file.as_deref()) else {
            continue;
        };
        if let Some(diagnostic) = normalize(&RawReport::Toplevel(report), &result.rewriter, resolver)
        {
            buckets.entry(uri).or_default().push(diagnostic);
        }
    }

    for report in result.inference_error_reports() {
        // 归属帧（首帧）不可定位时整条报告丢弃
        let Some(primary) = report.frames.first() else {
            continue;
        };
        let Some(uri) = resolver.resolve(primary.file.as_deref()) else {
            continue;
        };
        if let Some(diagnostic) =
            normalize(&RawReport::Inference(report), &result.rewriter, resolver)
        {
            buckets.entry(uri).or_default().push(diagnostic);
        }
    }

    buckets
}
