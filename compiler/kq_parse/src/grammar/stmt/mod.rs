//! Statement parsing.

use std::rc::Rc;

use kq_ir::{Expr, ExprKind, FuncDecl, PrintKind, Stmt, StmtKind, TokenKind};
use kq_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement, dispatching on the lookahead.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let Some(kind) = self.current_kind() else {
            return Err(self.error_expected("statement"));
        };
        trace!(?kind, "statement");

        let stmt = match kind {
            TokenKind::Let | TokenKind::Make => self.parse_var_decl()?,
            TokenKind::Show | TokenKind::Error | TokenKind::Alert => self.parse_print()?,
            TokenKind::If => self.parse_if()?,
            TokenKind::Loop => self.parse_repeat()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Func => self.parse_func()?,
            TokenKind::Return => self.parse_return()?,
            TokenKind::DelVar => {
                self.advance()?;
                StmtKind::DeleteVar(self.expect_ident()?.0)
            }
            TokenKind::DelFunc => {
                self.advance()?;
                StmtKind::DeleteFunc(self.expect_ident()?.0)
            }
            TokenKind::Connect => self.parse_connect()?,
            TokenKind::Async => {
                self.advance()?;
                StmtKind::Async(self.parse_block()?)
            }
            TokenKind::Ident(_) => self.parse_ident_stmt()?,
            TokenKind::Read
            | TokenKind::ArrAdd
            | TokenKind::ArrDel
            | TokenKind::ArrSize
            | TokenKind::ToJson
            | TokenKind::ParJson
            | TokenKind::Math(_)
            | TokenKind::Text(_) => StmtKind::Expr(self.parse_value_form()?),
            _ => return Err(self.error_expected("statement")),
        };
        Ok(Stmt::new(stmt, self.span_from(start)))
    }

    /// `{ stmt* }`
    pub(crate) fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        ensure_sufficient_stack(|| {
            self.expect(&TokenKind::LBrace)?;
            let mut stmts = Vec::new();
            loop {
                match self.current_kind() {
                    Some(TokenKind::RBrace) => break,
                    None => return Err(self.error_expected(TokenKind::RBrace.display_name())),
                    Some(_) => stmts.push(self.parse_stmt()?),
                }
            }
            self.expect(&TokenKind::RBrace)?;
            Ok(stmts)
        })
    }

    fn parse_var_decl(&mut self) -> Result<StmtKind, ParseError> {
        let immutable = self.check(&TokenKind::Make);
        self.advance()?;
        let (name, _) = self.expect_ident()?;
        self.expect(&TokenKind::Assign)?;
        let value = self.parse_expr()?;
        Ok(StmtKind::VarDecl {
            name,
            value,
            immutable,
        })
    }

    fn parse_print(&mut self) -> Result<StmtKind, ParseError> {
        let kind = match self.advance()?.map(|token| token.kind) {
            Some(TokenKind::Error) => PrintKind::Error,
            Some(TokenKind::Alert) => PrintKind::Alert,
            _ => PrintKind::Show,
        };
        let value = self.parse_expr()?;
        Ok(StmtKind::Print { kind, value })
    }

    /// `if ( expr ) { ... } [else { ... }]`
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.advance()?;
        let condition = self.parse_paren_expr()?;
        let then_block = self.parse_block()?;
        let else_block = if self.eat(&TokenKind::Else)? {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(StmtKind::If {
            condition,
            then_block,
            else_block,
        })
    }

    /// `loop ( ident , start , end ) { ... }`
    fn parse_repeat(&mut self) -> Result<StmtKind, ParseError> {
        self.advance()?;
        self.expect(&TokenKind::LParen)?;
        let (var, _) = self.expect_ident()?;
        self.expect(&TokenKind::Comma)?;
        let start = self.parse_expr()?;
        self.expect(&TokenKind::Comma)?;
        let end = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(StmtKind::Repeat {
            var,
            start,
            end,
            body,
        })
    }

    fn parse_while(&mut self) -> Result<StmtKind, ParseError> {
        self.advance()?;
        let condition = self.parse_paren_expr()?;
        let body = self.parse_block()?;
        Ok(StmtKind::While { condition, body })
    }

    /// `func name ( params ) { ... }`
    fn parse_func(&mut self) -> Result<StmtKind, ParseError> {
        self.advance()?;
        let (name, _) = self.expect_ident()?;
        self.expect(&TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                params.push(self.expect_ident()?.0);
                if !self.eat(&TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;

        self.func_depth += 1;
        let body = self.parse_block();
        self.func_depth -= 1;

        Ok(StmtKind::FuncDecl(Rc::new(FuncDecl {
            name,
            params,
            body: body?,
        })))
    }

    /// `return [expr]`; the value is omitted before `}`, end of input, or a
    /// keyword that can only start a statement.
    fn parse_return(&mut self) -> Result<StmtKind, ParseError> {
        let span = self.current_span();
        if self.func_depth == 0 {
            return Err(ParseError::return_outside_function(span));
        }
        self.advance()?;
        let value = match self.current_kind() {
            None | Some(TokenKind::RBrace) => None,
            Some(kind) if starts_statement_only(kind) => None,
            Some(_) => Some(self.parse_expr()?),
        };
        Ok(StmtKind::Return(value))
    }

    /// `connect "file.kq"`
    fn parse_connect(&mut self) -> Result<StmtKind, ParseError> {
        self.advance()?;
        match self.current_kind() {
            Some(TokenKind::Str(_)) => {}
            _ => return Err(self.error_expected("string path")),
        }
        match self.advance()?.map(|token| token.kind) {
            Some(TokenKind::Str(path)) => Ok(StmtKind::Connect(path)),
            _ => Err(self.error_expected("string path")),
        }
    }

    /// A statement starting with an identifier: call, index or assignment.
    fn parse_ident_stmt(&mut self) -> Result<StmtKind, ParseError> {
        let (name, span) = self.expect_ident()?;
        match self.current_kind() {
            Some(TokenKind::LParen) => {
                let args = self.parse_call_args()?;
                Ok(StmtKind::Expr(Expr::new(
                    ExprKind::Call { name, args },
                    self.span_from(span),
                )))
            }
            Some(TokenKind::LBracket) => {
                let index = self.parse_index()?;
                Ok(StmtKind::Expr(Expr::new(
                    ExprKind::Index {
                        array: name,
                        index: Box::new(index),
                    },
                    self.span_from(span),
                )))
            }
            Some(TokenKind::Assign) => {
                self.advance()?;
                let value = self.parse_expr()?;
                Ok(StmtKind::Assign { name, value })
            }
            _ => Err(self.error_expected("`(`, `[` or `=` after identifier")),
        }
    }

    /// `( expr )`
    fn parse_paren_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        Ok(expr)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

/// Keywords that begin a statement and never an expression.
fn starts_statement_only(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Let
            | TokenKind::Make
            | TokenKind::Show
            | TokenKind::Error
            | TokenKind::Alert
            | TokenKind::If
            | TokenKind::Loop
            | TokenKind::While
            | TokenKind::Func
            | TokenKind::Return
            | TokenKind::DelVar
            | TokenKind::DelFunc
            | TokenKind::Connect
            | TokenKind::Async
    )
}
