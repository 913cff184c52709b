//! Recursive-descent parser for KorvaqScrip.
//!
//! The parser holds one token of lookahead and pulls the next one from the
//! lazy [`Lexer`] on demand. [`parse`] produces the statements of a whole
//! program; nested blocks are parsed by the same statement dispatcher and
//! stop at the closing brace.
//!
//! All binary operators share a single precedence level and associate to
//! the left: `1 + 2 * 3` is `(1 + 2) * 3`.

mod cursor;
mod error;
mod grammar;

use kq_ir::{Span, Stmt, Token};
use kq_lexer::Lexer;

pub use error::{ParseError, ParseErrorKind};

/// Parser state.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    /// Lookahead token; `None` at end of input.
    current: Option<Token>,
    /// End offset of the most recently consumed token.
    prev_end: u32,
    /// Number of enclosing `func` bodies, for validating `return`.
    func_depth: u32,
}

impl<'src> Parser<'src> {
    /// Create a parser and load the first token.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next().transpose()?;
        Ok(Parser {
            lexer,
            current,
            prev_end: 0,
            func_depth: 0,
        })
    }

    /// Parse statements until end of input.
    pub fn parse(mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while self.current.is_some() {
            stmts.push(self.parse_stmt()?);
        }
        Ok(stmts)
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        Span::new(start.start, self.prev_end.max(start.end))
    }
}

/// Parse a complete program.
pub fn parse(source: &str) -> Result<Vec<Stmt>, ParseError> {
    Parser::new(source)?.parse()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
