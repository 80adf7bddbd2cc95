//! ember_scanner: Lexer/tokenizer for ember source code.
//!
//! Produces a stream of tokens, each stamped with the source name and the
//! 1-based line/column of its first character:
//! - Identifiers and the reserved keywords `func let return true false if else`
//! - Integer and float literals
//! - Arithmetic, comparison and assignment operators
//! - Delimiters `( ) { } , ;`
//!
//! Unrecognised characters are returned as illegal tokens rather than errors;
//! [`collect_diagnostics`] turns them into diagnostics.

mod char_codes;
mod options;
mod scanner;
mod token;

use ember_diagnostics::DiagnosticCollection;

pub use options::{OptionsError, ScannerOptions, DEFAULT_TAB_EXTRA_COLUMNS};
pub use scanner::{tokenize, Scanner};
pub use token::{lookup_ident, Token, TokenKind};

/// Collect a diagnostic for every illegal-character token in `tokens`.
pub fn collect_diagnostics<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> DiagnosticCollection {
    let mut diagnostics = DiagnosticCollection::new();
    for diagnostic in tokens.into_iter().filter_map(Token::to_diagnostic) {
        diagnostics.add(diagnostic);
    }
    diagnostics
}
