//! Amber Syntax
//!
//! Amber 语言前端：词法分析与容错的表层解析。
//! 解析永不失败；所有语法问题以 [`SyntaxDiagnostic`] 的形式
//! 收集到 [`ParseResult`] 中，供 CLI 与语言服务器消费。
//!
//! [`SyntaxDiagnostic`]: amber_diagnostics::SyntaxDiagnostic

pub mod load;
pub mod parser;
pub mod token;

pub use load::{LoadError, parse_file};
pub use parser::{ParseResult, parse};
pub use token::Token;
