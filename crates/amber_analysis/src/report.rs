//! Report - 原始错误报告
//!
//! 顶层求值与类型推导两个阶段各自的报告形状。
//! 报告只携带计算诊断所需的原始数据；
//! 坐标归一化与协议转换由语言服务器完成。

use amber_diagnostics::{DiagnosticLevel, SyntaxDiagnostic};

/// 调用栈帧
///
/// `line` 为 1-based 行号，0 表示未知/整文件。
/// `file` 为 `None` 时该帧不可定位。
#[derive(Debug, Clone)]
pub struct Frame {
    /// 帧所在文件（分析器上报的文件名）
    pub file: Option<String>,
    /// 1-based 行号，0 为未知哨兵
    pub line: u32,
    /// 所在函数名
    pub function: String,
    /// 参数类型的渲染文本
    pub args: Vec<String>,
}

impl Frame {
    /// 创建新的栈帧
    pub fn new(file: Option<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file,
            line,
            function: function.into(),
            args: Vec::new(),
        }
    }

    /// 设置参数类型
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// 渲染人类可读的函数签名
    pub fn render_signature(&self) -> String {
        format!("{}({})", self.function, self.args.join(", "))
    }
}

/// 推导报告的确定性分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceKind {
    /// 确定的类型错误
    Definite,
    /// 可能的类型错误（依赖运行时取值）
    Possible,
}

/// 类型推导错误报告
///
/// `frames[0]` 是错误发生点，其余为由近及远的调用方。
#[derive(Debug, Clone)]
pub struct InferenceErrorReport {
    /// 确定性分类
    pub kind: InferenceKind,
    /// 渲染后的报告文本（未经模块名后处理）
    pub message: String,
    /// 调用栈（错误点在前）
    pub frames: Vec<Frame>,
}

impl InferenceErrorReport {
    /// 创建新的推导报告
    pub fn new(kind: InferenceKind, message: impl Into<String>, frames: Vec<Frame>) -> Self {
        Self {
            kind,
            message: message.into(),
            frames,
        }
    }

    /// 报告自身的级别策略：确定错误为 Error，可能错误为 Warning
    pub fn severity(&self) -> DiagnosticLevel {
        match self.kind {
            InferenceKind::Definite => DiagnosticLevel::Error,
            InferenceKind::Possible => DiagnosticLevel::Warning,
        }
    }
}

/// 顶层求值错误的具体内容
#[derive(Debug, Clone)]
pub enum ToplevelErrorKind {
    /// 装载单元时发现的解析失败（携带被装载文件的源文本用于定位）
    Parse {
        /// 被装载文件的源文本
        source: String,
        /// 嵌套的语法诊断
        diagnostic: SyntaxDiagnostic,
    },
    /// 求值本身的错误
    Eval {
        /// 渲染后的报告文本（未经模块名后处理）
        message: String,
    },
}

/// 顶层求值错误报告
#[derive(Debug, Clone)]
pub struct ToplevelErrorReport {
    /// 所属文件（分析器上报的文件名），`None` 表示不可归属
    pub file: Option<String>,
    /// 1-based 行号，0 为未知哨兵
    pub line: u32,
    /// 报告内容
    pub kind: ToplevelErrorKind,
}

impl ToplevelErrorReport {
    /// 创建求值错误报告
    pub fn eval(file: Option<String>, line: u32, message: impl Into<String>) -> Self {
        Self {
            file,
            line,
            kind: ToplevelErrorKind::Eval {
                message: message.into(),
            },
        }
    }

    /// 创建嵌套解析失败报告
    pub fn parse_failure(
        file: Option<String>,
        source: impl Into<String>,
        diagnostic: SyntaxDiagnostic,
    ) -> Self {
        Self {
            file,
            line: 0,
            kind: ToplevelErrorKind::Parse {
                source: source.into(),
                diagnostic,
            },
        }
    }
}
