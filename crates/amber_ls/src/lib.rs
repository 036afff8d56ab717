//! Amber Language Server
//!
//! 诊断子系统：把解析器、顶层求值器与类型推导器的原始结果
//! 归一化为统一的协议诊断，并通过两种协议投递给客户端——
//! 服务器主动的推送扫描，以及客户端按文档发起的拉取。
//!
//! 拉取协议刻意只回答语法层诊断，全量（顶层/推导）结果
//! 只走推送——这是有记录的不对称设计，不是疏漏。

pub mod convert;
pub mod position;
pub mod publish;
pub mod resolve;
pub mod state;

use std::sync::{Arc, RwLock};

use amber_analysis::AnalysisResult;
use tower_lsp::jsonrpc::{Error, ErrorCode, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};

use resolve::DocumentResolver;
use state::{AnalysisCache, AnalysisUnit, DocumentStore};

/// JSON-RPC 错误码：内容已变更，客户端应稍后重试
const CONTENT_MODIFIED: i64 = -32801;

/// 语言服务器后端
#[derive(Debug)]
pub struct Backend {
    pub client: Client,
    /// 打开文档的活动解析状态
    documents: RwLock<DocumentStore>,
    /// 分析缓存（分析管线写入，诊断子系统只读）
    cache: RwLock<AnalysisCache>,
    /// 文档解析器（根目录在 initialize 时更新）
    resolver: RwLock<DocumentResolver>,
}

impl Backend {
    /// 创建后端
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: RwLock::new(DocumentStore::new()),
            cache: RwLock::new(AnalysisCache::new()),
            resolver: RwLock::new(DocumentResolver::from_cwd()),
        }
    }

    /// 可重试的拉取失败：活动状态已失效
    fn content_modified() -> Error {
        Error {
            code: ErrorCode::ServerError(CONTENT_MODIFIED),
            message: "content modified".into(),
            data: None,
        }
    }

    /// 分析管线在一次全量分析完成后调用：
    /// 替换式更新缓存条目，然后做一次推送扫描。
    pub async fn analysis_completed(&self, result: AnalysisResult) {
        let unit = {
            let resolver = self.resolver.read().unwrap();
            Arc::new(AnalysisUnit::from_result(&result, &resolver))
        };
        self.cache.write().unwrap().record(unit);
        self.publish_all().await;
    }

    /// 标记文档不参与全量分析
    pub fn mark_out_of_scope(&self, uri: Url) {
        self.cache.write().unwrap().mark_out_of_scope(uri);
    }

    /// 推送扫描：为每个有条目的文档发布一次完整诊断（空列表也发布）
    pub async fn publish_all(&self) {
        let payload = {
            let cache = self.cache.read().unwrap();
            publish::push_sweep(&cache)
        };
        for (uri, diagnostics) in payload {
            self.client.publish_diagnostics(uri, diagnostics, None).await;
        }
    }

    /// 打开/变更文档：重新解析并保存活动状态。
    /// 缓存还没有该文档的分析单元时，立即推送仅语法诊断。
    async fn on_document_text(&self, uri: Url, text: String) {
        let parse = amber_syntax::parse(&text);
        let syntax_push = {
            let cache = self.cache.read().unwrap();
            if cache.has_units(&uri) {
                None
            } else {
                Some(publish::syntax_only(&parse))
            }
        };
        self.documents.write().unwrap().update(uri.clone(), parse);
        if let Some(diagnostics) = syntax_push {
            self.client.publish_diagnostics(uri, diagnostics, None).await;
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        eprintln!("[AmberLS] Received initialize request");
        if let Some(root) = params.root_uri.as_ref().and_then(|uri| uri.to_file_path().ok()) {
            self.resolver.write().unwrap().set_root(root);
        }
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                diagnostic_provider: Some(DiagnosticServerCapabilities::Options(
                    DiagnosticOptions {
                        identifier: Some("amber".to_string()),
                        // 不支持按工作区拉取；全量结果只走推送
                        inter_file_dependencies: false,
                        workspace_diagnostics: false,
                        work_done_progress_options: WorkDoneProgressOptions::default(),
                    },
                )),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        eprintln!("[AmberLS] Server initialized and ready");
        self.client
            .log_message(MessageType::INFO, "Amber Language Server initialized!")
            .await;
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        eprintln!("[AmberLS] didOpen {}", params.text_document.uri);
        self.on_document_text(params.text_document.uri, params.text_document.text)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // FULL 同步：最后一个变更就是全文
        if let Some(change) = params.content_changes.into_iter().last() {
            self.on_document_text(params.text_document.uri, change.text)
                .await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        eprintln!("[AmberLS] didClose {uri}");
        self.documents.write().unwrap().close(&uri);
        self.cache.write().unwrap().evict(&uri);
        // 清除客户端残留的诊断
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn diagnostic(
        &self,
        params: DocumentDiagnosticParams,
    ) -> Result<DocumentDiagnosticReportResult> {
        let uri = params.text_document.uri;
        let items = {
            let documents = self.documents.read().unwrap();
            let Some(parse) = documents.get(&uri) else {
                // 文档已关闭或尚未打开：让客户端稍后重试，不是硬错误
                return Err(Self::content_modified());
            };
            if parse.sink.is_empty() {
                // 零语法诊断：立即返回空结果，不触碰缓存
                Vec::new()
            } else {
                publish::syntax_only(parse)
            }
        };
        Ok(DocumentDiagnosticReportResult::Report(
            DocumentDiagnosticReport::Full(RelatedFullDocumentDiagnosticReport {
                related_documents: None,
                full_document_diagnostic_report: FullDocumentDiagnosticReport {
                    result_id: None,
                    items,
                },
            }),
        ))
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}

/// 在标准输入输出上运行语言服务器
pub async fn run_server() {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
