//! Token consumption primitives.

use kq_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    #[inline]
    pub(crate) fn current_kind(&self) -> Option<&TokenKind> {
        self.current.as_ref().map(|token| &token.kind)
    }

    /// Span of the lookahead, or an empty span at end of input.
    pub(crate) fn current_span(&self) -> Span {
        match &self.current {
            Some(token) => token.span,
            None => Span::point(self.lexer.end_offset()),
        }
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().is_some_and(|k| k.same_kind(kind))
    }

    /// Consume the lookahead and load the next token.
    pub(crate) fn advance(&mut self) -> Result<Option<Token>, ParseError> {
        let next = self.lexer.next().transpose()?;
        let consumed = std::mem::replace(&mut self.current, next);
        if let Some(token) = &consumed {
            trace!(kind = ?token.kind, span = ?token.span, "consume");
            self.prev_end = token.span.end;
        }
        Ok(consumed)
    }

    /// Consume the lookahead if it has the same kind as `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a token of the given kind or fail naming both kinds.
    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            if let Some(token) = self.advance()? {
                return Ok(token);
            }
        }
        Err(self.error_expected(kind.display_name()))
    }

    pub(crate) fn expect_ident(&mut self) -> Result<(String, Span), ParseError> {
        if let Some(Token {
            kind: TokenKind::Ident(_),
            ..
        }) = &self.current
        {
            if let Some(Token {
                kind: TokenKind::Ident(name),
                span,
            }) = self.advance()?
            {
                return Ok((name, span));
            }
        }
        Err(self.error_expected("identifier"))
    }

    /// Error for the lookahead not being `expected`.
    #[cold]
    pub(crate) fn error_expected(&self, expected: &str) -> ParseError {
        match &self.current {
            Some(token) => ParseError::unexpected_token(expected, token.kind.to_string(), token.span),
            None => ParseError::unexpected_eof(expected, self.current_span()),
        }
    }
}
