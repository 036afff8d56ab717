//! Token - 词法单元
//!
//! 基于 logos 的 Amber 词法定义。
//! 空白与 `#` 行注释直接跳过，不产出词法单元。

use logos::Logos;

/// Amber 词法单元
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    // --- 关键字 ---
    #[token("module")]
    Module,
    #[token("import")]
    Import,
    #[token("fn")]
    Fn,
    #[token("let")]
    Let,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("return")]
    Return,

    // --- 字面量与标识符 ---
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,
    /// 缺少闭合引号的字符串（单独建模，便于报告准确区间）
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedStr,

    // --- 定界符 ---
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // --- 运算符与标点 ---
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("->")]
    Arrow,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
}

impl Token {
    /// 开定界符对应的闭定界符
    pub fn closing_delimiter(&self) -> Option<Token> {
        match self {
            Token::LParen => Some(Token::RParen),
            Token::LBracket => Some(Token::RBracket),
            Token::LBrace => Some(Token::RBrace),
            _ => None,
        }
    }

    /// 是否为闭定界符
    pub fn is_closing_delimiter(&self) -> bool {
        matches!(self, Token::RParen | Token::RBracket | Token::RBrace)
    }

    /// 定界符的显示文本
    pub fn delimiter_text(&self) -> &'static str {
        match self {
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::LBrace => "{",
            Token::RBrace => "}",
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    fn lex(source: &str) -> Vec<Token> {
        Token::lexer(source).filter_map(|t| t.ok()).collect()
    }

    #[test]
    fn test_keywords_and_idents() {
        assert_eq!(
            lex("fn main"),
            vec![Token::Fn, Token::Ident]
        );
        assert_eq!(lex("lettuce"), vec![Token::Ident]); // 非关键字前缀
    }

    #[test]
    fn test_numbers_and_strings() {
        assert_eq!(lex("42 3.14"), vec![Token::Number, Token::Number]);
        assert_eq!(lex(r#""hello""#), vec![Token::Str]);
        assert_eq!(lex(r#""no end"#), vec![Token::UnterminatedStr]);
    }

    #[test]
    fn test_comment_skipped() {
        assert_eq!(lex("x # comment\ny"), vec![Token::Ident, Token::Ident]);
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(Token::LParen.closing_delimiter(), Some(Token::RParen));
        assert_eq!(Token::LBrace.closing_delimiter(), Some(Token::RBrace));
        assert!(Token::RBracket.is_closing_delimiter());
        assert!(!Token::LBracket.is_closing_delimiter());
    }

    #[test]
    fn test_error_token() {
        let results: Vec<_> = Token::lexer("let @").collect();
        assert_eq!(results[0], Ok(Token::Let));
        assert!(results[1].is_err());
    }
}
