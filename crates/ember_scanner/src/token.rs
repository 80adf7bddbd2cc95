//! Token kinds, the reserved-keyword table, and the scanned token value.

use ember_core::text::{Position, TextSpan};
use ember_diagnostics::{messages, Diagnostic, LexicalError};
use std::fmt;
use std::sync::Arc;

/// The closed set of token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Illegal,

    // Identifiers and literals
    Ident,
    Int,
    Float,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Function,
    Let,
    Return,
    True,
    False,
    If,
    Else,
}

impl TokenKind {
    /// Whether this is one of the reserved keyword kinds.
    pub fn is_keyword(self) -> bool {
        self.keyword_text().is_some()
    }

    /// Whether this is an identifier or numeric literal kind.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Int | TokenKind::Float)
    }

    /// Whether this is an arithmetic, comparison or assignment operator.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::Eq
                | TokenKind::NotEq
        )
    }

    /// Get the source text of a keyword kind, or None.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Function => Some("func"),
            TokenKind::Let => Some("let"),
            TokenKind::Return => Some("return"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            _ => None,
        }
    }

    /// Get the canonical text of an operator or delimiter kind, or None.
    pub fn symbol_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Bang => Some("!"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Lt => Some("<"),
            TokenKind::LtEq => Some("<="),
            TokenKind::Gt => Some(">"),
            TokenKind::GtEq => Some(">="),
            TokenKind::Eq => Some("=="),
            TokenKind::NotEq => Some("!="),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            _ => None,
        }
    }

    /// The name used when printing this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify identifier text: a reserved keyword kind on an exact,
/// case-sensitive match, otherwise [`TokenKind::Ident`].
pub fn lookup_ident(text: &str) -> TokenKind {
    match text {
        "func" => TokenKind::Function,
        "let" => TokenKind::Let,
        "return" => TokenKind::Return,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        _ => TokenKind::Ident,
    }
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source text of the token; empty for end-of-input.
    pub text: String,
    /// The logical name of the source this token came from.
    pub source_name: Arc<str>,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// 1-based column of the token's first character.
    pub column: u32,
    /// Byte span of `text` within the input.
    pub span: TextSpan,
}

impl Token {
    /// The line/column where this token starts.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    #[inline]
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }

    /// A diagnostic for an illegal-character token, or None for any other kind.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        self.is_illegal().then(|| {
            Diagnostic::with_location(
                &*self.source_name,
                self.span,
                self.position(),
                &messages::ILLEGAL_CHARACTER,
                &[self.text.as_str()],
            )
        })
    }

    /// A renderable error for an illegal-character token, labelled against
    /// `source`, or None for any other kind.
    pub fn to_lexical_error(&self, source: &str) -> Option<LexicalError> {
        self.is_illegal().then(|| {
            LexicalError::new(
                &self.source_name,
                source,
                self.text.as_str(),
                self.span,
                self.position(),
            )
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} {} {:?}",
            self.source_name, self.line, self.column, self.kind, self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keywords() {
        for kind in [
            TokenKind::Function,
            TokenKind::Let,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
        ] {
            let text = kind.keyword_text().unwrap();
            assert_eq!(lookup_ident(text), kind);
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_lookup_non_keywords() {
        for text in ["func2", "Func", "LET", "lets", "el", "x", "_", "function"] {
            assert_eq!(lookup_ident(text), TokenKind::Ident, "{text}");
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Eq.to_string(), "==");
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_symbol_kinds_print_their_text() {
        for kind in [
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
        ] {
            assert_eq!(Some(kind.as_str()), kind.symbol_text());
        }
        assert!(!TokenKind::Illegal.as_str().is_empty());
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::GtEq.is_operator());
        assert!(!TokenKind::Comma.is_operator());
        assert!(TokenKind::Float.is_literal());
        assert!(!TokenKind::True.is_literal());
        assert!(!TokenKind::Ident.is_keyword());
        assert_eq!(TokenKind::LBrace.symbol_text(), Some("{"));
        assert_eq!(TokenKind::Int.symbol_text(), None);
    }

    fn token(kind: TokenKind, text: &str, line: u32, column: u32, start: u32) -> Token {
        Token {
            kind,
            text: text.to_string(),
            source_name: Arc::from("unit"),
            line,
            column,
            span: TextSpan::new(start, text.len() as u32),
        }
    }

    #[test]
    fn test_token_display() {
        let tok = token(TokenKind::Int, "42", 3, 7, 20);
        assert_eq!(tok.to_string(), "unit:3:7 INT \"42\"");
        assert_eq!(tok.position(), Position::new(3, 7));
    }

    #[test]
    fn test_illegal_token_diagnostic() {
        let tok = token(TokenKind::Illegal, "@", 1, 3, 2);
        let diag = tok.to_diagnostic().unwrap();
        assert_eq!(diag.to_string(), "unit:1:3: error E1001: Illegal character '@'.");

        let err = tok.to_lexical_error("a @ b").unwrap();
        assert_eq!(err.span.offset(), 2);

        let ok = token(TokenKind::Ident, "a", 1, 1, 0);
        assert!(ok.to_diagnostic().is_none());
        assert!(ok.to_lexical_error("a").is_none());
    }
}
