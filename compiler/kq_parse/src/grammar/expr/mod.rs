//! Expression parsing.
//!
//! ```text
//! expr       := unary (BINOP unary)*
//! unary      := ('!' | '-') unary | primary
//! primary    := literal | IDENT | IDENT '(' args ')' | IDENT '[' expr ']'
//!             | '[' items ']' | '(' expr ')' | value_form
//! ```
//!
//! Value forms with an operand take a full expression, so `floor 2.5 + 1`
//! floors `3.5`.

use kq_ir::{Expr, ExprKind, Span, TokenKind, UnaryOp};
use kq_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_binary())
    }

    /// One flat, left-associative level for every binary operator.
    fn parse_binary(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.current_kind().and_then(TokenKind::binary_op) {
            self.advance()?;
            let right = self.parse_unary()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            Some(TokenKind::Bang) => UnaryOp::Not,
            Some(TokenKind::Minus) => UnaryOp::Neg,
            _ => return self.parse_primary(),
        };
        let start = self.current_span();
        self.advance()?;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            Some(
                TokenKind::Number(_)
                | TokenKind::Str(_)
                | TokenKind::Bool(_)
                | TokenKind::Void
                | TokenKind::Ident(_),
            ) => match self.advance()?.map(|token| token.kind) {
                Some(TokenKind::Number(n)) => ExprKind::Number(n),
                Some(TokenKind::Str(s)) => ExprKind::Str(s),
                Some(TokenKind::Bool(b)) => ExprKind::Bool(b),
                Some(TokenKind::Ident(name)) => return self.parse_ident_tail(name, start),
                _ => ExprKind::Void,
            },
            Some(TokenKind::LBracket) => self.parse_array_literal()?,
            Some(TokenKind::LParen) => {
                self.advance()?;
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                return Ok(Expr::new(inner.kind, self.span_from(start)));
            }
            Some(
                TokenKind::Read
                | TokenKind::ArrAdd
                | TokenKind::ArrDel
                | TokenKind::ArrSize
                | TokenKind::ToJson
                | TokenKind::ParJson
                | TokenKind::Math(_)
                | TokenKind::Text(_),
            ) => return self.parse_value_form(),
            _ => return Err(self.error_expected("expression")),
        };
        Ok(Expr::new(kind, self.span_from(start)))
    }

    /// After an identifier: call, index, or plain variable reference.
    fn parse_ident_tail(&mut self, name: String, start: Span) -> Result<Expr, ParseError> {
        let kind = match self.current_kind() {
            Some(TokenKind::LParen) => ExprKind::Call {
                name,
                args: self.parse_call_args()?,
            },
            Some(TokenKind::LBracket) => ExprKind::Index {
                array: name,
                index: Box::new(self.parse_index()?),
            },
            _ => ExprKind::Ident(name),
        };
        Ok(Expr::new(kind, self.span_from(start)))
    }

    /// `( [expr (, expr)*] )`
    pub(crate) fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let args = self.parse_comma_list(&TokenKind::RParen)?;
        self.expect(&TokenKind::RParen)?;
        Ok(args)
    }

    /// `[ expr ]` after an array name.
    pub(crate) fn parse_index(&mut self) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LBracket)?;
        let index = self.parse_expr()?;
        self.expect(&TokenKind::RBracket)?;
        Ok(index)
    }

    fn parse_array_literal(&mut self) -> Result<ExprKind, ParseError> {
        self.expect(&TokenKind::LBracket)?;
        let items = self.parse_comma_list(&TokenKind::RBracket)?;
        self.expect(&TokenKind::RBracket)?;
        Ok(ExprKind::Array(items))
    }

    /// Comma-separated expressions up to (not including) `close`.
    fn parse_comma_list(&mut self, close: &TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        if self.check(close) {
            return Ok(items);
        }
        loop {
            items.push(self.parse_expr()?);
            if !self.eat(&TokenKind::Comma)? {
                return Ok(items);
            }
        }
    }

    /// Keyword forms that produce a value: `read`, array helpers, JSON,
    /// math and text helpers.
    pub(crate) fn parse_value_form(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let Some(token) = self.advance()? else {
            return Err(self.error_expected("expression"));
        };
        let kind = match token.kind {
            TokenKind::Read => ExprKind::Read(Box::new(self.parse_expr()?)),
            TokenKind::ArrAdd => {
                let (array, _) = self.expect_ident()?;
                ExprKind::ArrAdd {
                    array,
                    value: Box::new(self.parse_expr()?),
                }
            }
            TokenKind::ArrDel => {
                let (array, _) = self.expect_ident()?;
                ExprKind::ArrDel {
                    array,
                    value: Box::new(self.parse_expr()?),
                }
            }
            TokenKind::ArrSize => ExprKind::ArrSize(self.expect_ident()?.0),
            TokenKind::ToJson => ExprKind::ToJson(Box::new(self.parse_expr()?)),
            TokenKind::ParJson => ExprKind::ParJson(Box::new(self.parse_expr()?)),
            TokenKind::Math(func) => ExprKind::Math {
                func,
                arg: Box::new(self.parse_expr()?),
            },
            TokenKind::Text(func) => ExprKind::Text {
                func,
                arg: Box::new(self.parse_expr()?),
            },
            other => {
                return Err(ParseError::unexpected_token(
                    "expression",
                    other.to_string(),
                    token.span,
                ))
            }
        };
        Ok(Expr::new(kind, self.span_from(start)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
