//! Parser - 容错表层解析
//!
//! 把源文本扫描为词法单元序列，同时收集语法诊断：
//! 非法字符、未闭合字符串、不配对的定界符。
//! 解析是全量且容错的：任何输入都会得到一个 [`ParseResult`]。

use amber_diagnostics::{DiagnosticSink, LineIndex, Span};
use logos::Logos;

use crate::token::Token;

/// 一次解析的完整结果
///
/// 语言服务器把打开文档的最新 `ParseResult` 作为"活动解析状态"保存，
/// 拉取式诊断只依赖这份状态。
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// 源文本
    pub source: String,
    /// 行列索引（与 `source` 同步构建）
    pub index: LineIndex,
    /// 词法单元及其字节区间
    pub tokens: Vec<(Token, Span)>,
    /// 收集的语法诊断
    pub sink: DiagnosticSink,
}

impl ParseResult {
    /// 是否存在语法错误
    pub fn has_errors(&self) -> bool {
        self.sink.has_errors()
    }

    /// 所有语法诊断
    pub fn diagnostics(&self) -> &[amber_diagnostics::SyntaxDiagnostic] {
        self.sink.diagnostics()
    }
}

/// 解析源文本
pub fn parse(source: &str) -> ParseResult {
    let mut sink = DiagnosticSink::new();
    let mut tokens = Vec::new();
    // 未闭合的开定界符栈
    let mut open_delims: Vec<(Token, Span)> = Vec::new();

    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => {
                if token.closing_delimiter().is_some() {
                    open_delims.push((token, span.clone()));
                } else if token.is_closing_delimiter() {
                    match open_delims.pop() {
                        Some((open, _)) if open.closing_delimiter() == Some(token) => {}
                        Some((open, open_span)) => {
                            sink.error(
                                format!(
                                    "mismatched closing delimiter `{}`, expected `{}`",
                                    token.delimiter_text(),
                                    open.closing_delimiter().unwrap_or(open).delimiter_text()
                                ),
                                span.clone(),
                            );
                            // 重新压回，让后续闭定界符还有机会配对
                            open_delims.push((open, open_span));
                        }
                        None => {
                            sink.error(
                                format!(
                                    "unmatched closing delimiter `{}`",
                                    token.delimiter_text()
                                ),
                                span.clone(),
                            );
                        }
                    }
                } else if token == Token::UnterminatedStr {
                    sink.error("unterminated string literal", span.clone());
                }
                tokens.push((token, span));
            }
            Err(()) => {
                sink.error(
                    format!("unexpected character `{}`", &source[span.clone()]),
                    span,
                );
            }
        }
    }

    for (open, span) in open_delims {
        sink.error(
            format!("unclosed delimiter `{}`", open.delimiter_text()),
            span,
        );
    }

    ParseResult {
        source: source.to_string(),
        index: LineIndex::new(source),
        tokens,
        sink,
    }
}
