//! The ember scanner.
//!
//! Converts source text into tokens on demand. The scanner keeps a single
//! forward-only cursor with one character of lookahead and never fails:
//! characters it does not recognise come back as [`TokenKind::Illegal`]
//! tokens for the consumer to report.

use crate::char_codes::*;
use crate::options::ScannerOptions;
use crate::token::{lookup_ident, Token, TokenKind};
use ember_core::text::{TextPos, TextSpan};
use std::iter::FusedIterator;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// The scanner converts ember source text into tokens.
pub struct Scanner<'src> {
    /// The source text being scanned.
    input: &'src str,
    /// Logical name stamped on every token.
    source_name: Arc<str>,
    options: ScannerOptions,
    /// Byte offset of `current_char`.
    position: usize,
    /// Byte offset of the character after `current_char`.
    read_position: usize,
    /// The character under the cursor; `None` once the input is exhausted.
    current_char: Option<char>,
    line: u32,
    column: u32,
    /// Set once the iterator has yielded the end-of-input token.
    eof_yielded: bool,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner over `input` with default options.
    ///
    /// Line and column counters saturate at `u32::MAX`, and so do span
    /// offsets for inputs larger than 4 GiB.
    pub fn new(input: &'src str, source_name: impl Into<Arc<str>>) -> Self {
        Self::with_options(input, source_name, ScannerOptions::default())
    }

    /// Create a new scanner over `input`.
    pub fn with_options(
        input: &'src str,
        source_name: impl Into<Arc<str>>,
        options: ScannerOptions,
    ) -> Self {
        let mut scanner = Self {
            input,
            source_name: source_name.into(),
            options,
            position: 0,
            read_position: 0,
            current_char: None,
            line: 1,
            column: 0,
            eof_yielded: false,
        };
        trace!(
            target: "ember::scanner",
            source = %scanner.source_name,
            len = input.len(),
            "Creating scanner"
        );
        scanner.read_char();
        scanner
    }

    /// The logical source name stamped on every token.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// The options this scanner was built with.
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Whether the cursor has reached the end of the input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_char.is_none()
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// Move the cursor forward by one character.
    ///
    /// Once the end of input has been reached this is a no-op, so the end
    /// position is stable.
    fn read_char(&mut self) {
        if self.read_position > self.input.len() {
            return;
        }
        self.current_char = self.input[self.read_position..].chars().next();
        self.position = self.read_position;
        self.read_position += self.current_char.map_or(1, char::len_utf8);
        self.column = self.column.saturating_add(1);
    }

    /// The character after `current_char`, without advancing.
    #[inline]
    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position..)?.chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char.filter(|&c| is_white_space(c)) {
            match ch {
                LINE_FEED => {
                    self.line = self.line.saturating_add(1);
                    self.column = 0;
                }
                TAB => self.column = self.column.saturating_add(self.options.tab_extra_columns),
                _ => {}
            }
            self.read_char();
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan and return the next token.
    ///
    /// After the end of input every call returns an [`TokenKind::Eof`]
    /// token with empty text at the same position.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let line = self.line;
        let column = self.column;

        let Some(ch) = self.current_char else {
            trace!(target: "ember::scanner", line, column, "Reached EOF");
            return self.make_token(TokenKind::Eof, start, line, column);
        };

        let kind = match ch {
            PLUS => self.scan_single(TokenKind::Plus),
            MINUS => self.scan_single(TokenKind::Minus),
            ASTERISK => self.scan_single(TokenKind::Asterisk),
            SLASH => self.scan_single(TokenKind::Slash),
            COMMA => self.scan_single(TokenKind::Comma),
            SEMICOLON => self.scan_single(TokenKind::Semicolon),
            OPEN_PAREN => self.scan_single(TokenKind::LParen),
            CLOSE_PAREN => self.scan_single(TokenKind::RParen),
            OPEN_BRACE => self.scan_single(TokenKind::LBrace),
            CLOSE_BRACE => self.scan_single(TokenKind::RBrace),

            EQUALS => self.scan_one_or_two(EQUALS, TokenKind::Eq, TokenKind::Assign),
            EXCLAMATION => self.scan_one_or_two(EQUALS, TokenKind::NotEq, TokenKind::Bang),
            LESS_THAN => self.scan_one_or_two(EQUALS, TokenKind::LtEq, TokenKind::Lt),
            GREATER_THAN => self.scan_one_or_two(EQUALS, TokenKind::GtEq, TokenKind::Gt),

            _ if is_identifier_start(ch) => self.scan_identifier(start),
            _ if is_digit(ch) => self.scan_number(),

            _ => {
                warn!(
                    target: "ember::scanner",
                    source = %self.source_name,
                    line,
                    column,
                    character = ?ch,
                    "Illegal character"
                );
                self.scan_single(TokenKind::Illegal)
            }
        };

        let token = self.make_token(kind, start, line, column);
        debug!(
            target: "ember::scanner",
            kind = %token.kind,
            text = ?token.text,
            line,
            column,
            "Produced token"
        );
        token
    }

    /// Build a token whose text runs from `start` to the cursor.
    fn make_token(&self, kind: TokenKind, start: usize, line: u32, column: u32) -> Token {
        Token {
            kind,
            text: self.input[start..self.position].to_string(),
            source_name: Arc::clone(&self.source_name),
            line,
            column,
            span: TextSpan::from_bounds(text_pos(start), text_pos(self.position)),
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_single(&mut self, kind: TokenKind) -> TokenKind {
        self.read_char();
        kind
    }

    /// Scan an operator that becomes `double` when followed by `expected`
    /// and is `single` otherwise.
    fn scan_one_or_two(&mut self, expected: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek_char() == Some(expected) {
            self.read_char();
            self.read_char();
            double
        } else {
            self.read_char();
            single
        }
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        while self.current_char.is_some_and(is_identifier_part) {
            self.read_char();
        }
        lookup_ident(&self.input[start..self.position])
    }

    /// Scan a run of digits containing at most one decimal point.
    ///
    /// A second `.` ends the literal and is left for the next token, so
    /// `1.2.3` scans as `1.2` and the next token starts at the second `.`.
    fn scan_number(&mut self) -> TokenKind {
        let mut kind = TokenKind::Int;
        while self.current_char.is_some_and(|c| is_digit(c) || c == DOT) {
            self.read_char();
            if self.current_char == Some(DOT) {
                if kind == TokenKind::Float {
                    break;
                }
                kind = TokenKind::Float;
            }
        }
        kind
    }
}

/// Convert a byte offset to a span position, pinning offsets past 4 GiB
/// to `TextPos::MAX`.
#[inline]
fn text_pos(offset: usize) -> TextPos {
    TextPos::try_from(offset).unwrap_or(TextPos::MAX)
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields every token up to and including the first end-of-input token.
    fn next(&mut self) -> Option<Token> {
        if self.eof_yielded {
            return None;
        }
        let token = self.next_token();
        self.eof_yielded = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan all of `input`, returning its tokens followed by the end-of-input token.
pub fn tokenize(input: &str, source_name: impl Into<Arc<str>>) -> Vec<Token> {
    Scanner::new(input, source_name).collect()
}
