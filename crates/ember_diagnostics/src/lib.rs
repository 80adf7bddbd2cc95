//! ember_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! The scanner never fails; it hands illegal characters to its consumer as
//! tokens. This crate turns those into structured diagnostics, either as
//! plain [`Diagnostic`] records or as a [`LexicalError`] that `miette` can
//! render against the original source.

use ember_core::text::{Position, TextSpan};
use miette::{NamedSource, SourceSpan};
use std::fmt;
use thiserror::Error;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The logical source name where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The byte span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    /// The line/column the scanner reported for the offending token.
    pub position: Option<Position>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info (global diagnostic).
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            position: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic with file, span and position info.
    pub fn with_location(
        file: impl Into<String>,
        span: TextSpan,
        position: Position,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: Some(file.into()),
            span: Some(span),
            position: Some(position),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(position) = self.position {
                write!(f, ":{}", position)?;
            }
            write!(f, ": ")?;
        }
        write!(
            f,
            "{} E{}: {}",
            self.category, self.code, self.message_text
        )
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated while scanning.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Sort diagnostics by file and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then_with(|| a.position.cmp(&b.position))
        });
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollection {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

/// An illegal character, packaged for graphical reporting.
///
/// Carries its own copy of the named source so it can outlive the scanner.
#[derive(Debug, Error, miette::Diagnostic)]
#[error("illegal character '{character}' at {position}")]
#[diagnostic(code(ember::scanner::illegal_character))]
pub struct LexicalError {
    pub source_name: String,
    pub character: String,
    pub position: Position,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("not a recognised token")]
    pub span: SourceSpan,
}

impl LexicalError {
    pub fn new(
        source_name: &str,
        source: &str,
        character: impl Into<String>,
        span: TextSpan,
        position: Position,
    ) -> Self {
        Self {
            source_name: source_name.to_string(),
            character: character.into(),
            position,
            src: NamedSource::new(source_name, source.to_string()),
            span: (span.start as usize, span.length as usize).into(),
        }
    }

    /// The plain diagnostic record for this error.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::with_location(
            self.source_name.as_str(),
            TextSpan::new(self.span.offset() as u32, self.span.len() as u32),
            self.position,
            &messages::ILLEGAL_CHARACTER,
            &[self.character.as_str()],
        )
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const ILLEGAL_CHARACTER: DiagnosticMessage = diag!(1001, Error, "Illegal character '{0}'.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("'{0}' vs '{1}'", &["a", "b"]), "'a' vs 'b'");
        assert_eq!(format_message("no args", &[]), "no args");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::with_location(
            "main.em",
            TextSpan::new(4, 1),
            Position::new(1, 5),
            &messages::ILLEGAL_CHARACTER,
            &["@"],
        );
        assert_eq!(diag.to_string(), "main.em:1:5: error E1001: Illegal character '@'.");

        let global = Diagnostic::new(&messages::ILLEGAL_CHARACTER, &["~"]);
        assert_eq!(global.to_string(), "error E1001: Illegal character '~'.");
        assert!(global.is_error());
    }

    #[test]
    fn test_collection_counts_and_sort() {
        let mut collection = DiagnosticCollection::new();
        collection.add(Diagnostic::with_location(
            "b.em",
            TextSpan::new(0, 1),
            Position::new(1, 1),
            &messages::ILLEGAL_CHARACTER,
            &["$"],
        ));
        collection.add(Diagnostic::with_location(
            "a.em",
            TextSpan::new(9, 1),
            Position::new(2, 3),
            &messages::ILLEGAL_CHARACTER,
            &["#"],
        ));
        collection.add(Diagnostic::with_location(
            "a.em",
            TextSpan::new(2, 1),
            Position::new(1, 3),
            &messages::ILLEGAL_CHARACTER,
            &["?"],
        ));
        collection.add(Diagnostic::new(&messages::ILLEGAL_CHARACTER, &["~"]));

        assert_eq!(collection.len(), 4);
        assert_eq!(collection.error_count(), 4);
        assert!(collection.has_errors());

        collection.sort();
        let files: Vec<_> = collection.iter().map(|d| d.file.clone()).collect();
        assert_eq!(
            files,
            vec![None, Some("a.em".into()), Some("a.em".into()), Some("b.em".into())]
        );
        assert_eq!(collection.diagnostics()[1].position, Some(Position::new(1, 3)));
    }

    #[test]
    fn test_lexical_error() {
        let source = "let a = 1 @ 2;";
        let err = LexicalError::new("demo", source, "@", TextSpan::new(10, 1), Position::new(1, 11));
        assert_eq!(err.to_string(), "illegal character '@' at 1:11");
        assert_eq!(err.span.offset(), 10);
        assert_eq!(err.span.len(), 1);

        let diag = err.to_diagnostic();
        assert_eq!(diag.file.as_deref(), Some("demo"));
        assert_eq!(diag.span, Some(TextSpan::new(10, 1)));
        assert_eq!(diag.message_text, "Illegal character '@'.");
    }
}
