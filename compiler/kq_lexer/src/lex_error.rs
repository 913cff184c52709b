//! Lexer errors.

use kq_diagnostic::{Diagnostic, ErrorCode};
use kq_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("unterminated string literal (missing closing {quote})")]
    UnterminatedString { quote: char },
    #[error("`{word}` is a restricted word and cannot be used")]
    RestrictedWord { word: String, hint: &'static str },
}

/// A lexical error at a location in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    #[cold]
    pub fn unexpected_char(ch: char, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedChar(ch),
            span,
        }
    }

    #[cold]
    pub fn unterminated_string(quote: char, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString { quote },
            span,
        }
    }

    #[cold]
    pub fn restricted_word(word: &str, hint: &'static str, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::RestrictedWord {
                word: word.to_string(),
                hint,
            },
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0001,
            LexErrorKind::UnterminatedString { .. } => ErrorCode::E0002,
            LexErrorKind::RestrictedWord { .. } => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_span(self.span);
        match &self.kind {
            LexErrorKind::RestrictedWord { hint, .. } => diag.with_help(*hint),
            LexErrorKind::UnterminatedString { .. } => {
                diag.with_note("strings run to the matching quote and may span lines")
            }
            LexErrorKind::UnexpectedChar(_) => diag,
        }
    }
}
