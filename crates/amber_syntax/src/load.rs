//! Load - 文件加载
//!
//! 从磁盘读取源文件并解析，错误类型集成统一诊断流程

use std::path::Path;

use thiserror::Error;

use crate::parser::{ParseResult, parse};

/// 文件加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO 错误（含非 UTF-8 内容）
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 读取并解析一个源文件
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseResult, LoadError> {
    let source = std::fs::read_to_string(path)?;
    Ok(parse(&source))
}
