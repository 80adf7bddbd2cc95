//! Character constants and classification used by the scanner.
//!
//! Classification is ASCII-only: identifiers are `[A-Za-z_][A-Za-z0-9_]*`
//! and anything outside the tables below scans as an illegal character.

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const TAB: char = '\t';
pub const SPACE: char = ' ';

pub const EXCLAMATION: char = '!';
pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';
pub const ASTERISK: char = '*';
pub const PLUS: char = '+';
pub const COMMA: char = ',';
pub const MINUS: char = '-';
pub const DOT: char = '.';
pub const SLASH: char = '/';
pub const SEMICOLON: char = ';';
pub const LESS_THAN: char = '<';
pub const EQUALS: char = '=';
pub const GREATER_THAN: char = '>';
pub const UNDERSCORE: char = '_';
pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';

/// Check if a character is skipped between tokens.
#[inline]
pub fn is_white_space(ch: char) -> bool {
    matches!(ch, SPACE | TAB | LINE_FEED | CARRIAGE_RETURN)
}

/// Check if a character is an ASCII letter or underscore.
#[inline]
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == UNDERSCORE
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    is_letter(ch)
}

/// Check if a character can continue an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}
