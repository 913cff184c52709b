//! KorvaqScrip IR - shared vocabulary for the lexer, parser and evaluator.
//!
//! # Contents
//!
//! - [`Span`]: byte range into the source text
//! - [`Token`] / [`TokenKind`]: lexer output, consumed one at a time by the parser
//! - [`Stmt`] / [`Expr`]: the syntax tree produced by the parser
//!
//! Syntax tree nodes are plain owned enums. They are never mutated after the
//! parser builds them; the evaluator only borrows them.

mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, Expr, ExprKind, FuncDecl, MathFn, PrintKind, Stmt, StmtKind, TextFn, UnaryOp,
};
pub use span::Span;
pub use token::{Token, TokenKind};

/// The one name that can never be bound. `delvar all` / `delfunc all`
/// use it to address every binding at once.
pub const RESERVED_ALL: &str = "all";
