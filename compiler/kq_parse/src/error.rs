//! Parse error types.
//!
//! Parsing stops at the first error; there is no recovery and no partial
//! tree. Lexical errors surface through the parser because tokens are
//! pulled lazily.

use kq_diagnostic::{Diagnostic, ErrorCode};
use kq_ir::Span;
use kq_lexer::LexError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
    #[error("`return` outside of a function body")]
    ReturnOutsideFunction,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn unexpected_token(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: found.into(),
            },
            span,
        }
    }

    #[cold]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedEof {
                expected: expected.into(),
            },
            span,
        }
    }

    #[cold]
    pub fn return_outside_function(span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::ReturnOutsideFunction,
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::Lex(err) => err.code(),
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1002,
            ParseErrorKind::ReturnOutsideFunction => ErrorCode::E1003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            ParseErrorKind::Lex(err) => err.to_diagnostic(),
            ParseErrorKind::ReturnOutsideFunction => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_span(self.span)
                .with_note("`return` is only valid inside a `func` body"),
            _ => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_span(self.span),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span;
        ParseError {
            kind: ParseErrorKind::Lex(err),
            span,
        }
    }
}
