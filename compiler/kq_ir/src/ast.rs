//! Syntax tree.
//!
//! Two families: statements ([`Stmt`]) and expressions ([`Expr`]). Forms
//! that both act and produce a value (`arradd`, `read`, math and text
//! helpers, calls, indexing) are expressions; when they appear at statement
//! position the parser wraps them in [`StmtKind::Expr`].

use std::fmt;
use std::rc::Rc;

use crate::Span;

/// A statement with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Output channel a print-like statement writes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrintKind {
    /// `show`
    Show,
    /// `error`
    Error,
    /// `alert`
    Alert,
}

/// A user function: parameter names and body.
///
/// Shared behind `Rc` so the environment can hold a definition while the
/// evaluator walks its body.
#[derive(Debug, PartialEq)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `let name = value` or `make name = value`.
    VarDecl {
        name: String,
        value: Expr,
        immutable: bool,
    },
    /// `name = value`.
    Assign { name: String, value: Expr },
    /// `show` / `error` / `alert`.
    Print { kind: PrintKind, value: Expr },
    If {
        condition: Expr,
        then_block: Vec<Stmt>,
        else_block: Option<Vec<Stmt>>,
    },
    /// `loop (var, start, end) { body }`, inclusive on both ends.
    Repeat {
        var: String,
        start: Expr,
        end: Expr,
        body: Vec<Stmt>,
    },
    While { condition: Expr, body: Vec<Stmt> },
    FuncDecl(Rc<FuncDecl>),
    /// `return` with an optional value.
    Return(Option<Expr>),
    /// `delvar name` (`name` may be `all`).
    DeleteVar(String),
    /// `delfunc name` (`name` may be `all`).
    DeleteFunc(String),
    /// `connect "file.kq"`.
    Connect(String),
    /// `async { ... }`.
    Async(Vec<Stmt>),
    /// A value form evaluated for its effect.
    Expr(Expr),
}

/// An expression with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Number(f64),
    Str(String),
    Bool(bool),
    /// The `void` literal.
    Void,
    Ident(String),
    /// `[a, b, c]`
    Array(Vec<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `name(args)`
    Call { name: String, args: Vec<Expr> },
    /// `name[index]`
    Index { array: String, index: Box<Expr> },
    /// `read path`
    Read(Box<Expr>),
    /// `arradd array value`
    ArrAdd { array: String, value: Box<Expr> },
    /// `arrdel array value`
    ArrDel { array: String, value: Box<Expr> },
    /// `arrsize array`
    ArrSize(String),
    /// `tojson value`
    ToJson(Box<Expr>),
    /// `parjson text`
    ParJson(Box<Expr>),
    Math { func: MathFn, arg: Box<Expr> },
    Text { func: TextFn, arg: Box<Expr> },
}

/// Binary operators. All share one precedence level and associate left.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    BitXor,
    Eq,
    StrictEq,
    NotEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
            BinaryOp::BitXor => "^",
            BinaryOp::Eq => "==",
            BinaryOp::StrictEq => "===",
            BinaryOp::NotEq => "!=",
            BinaryOp::StrictNotEq => "!==",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `!`
    Not,
    /// `-`
    Neg,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
        })
    }
}

/// One-argument numeric helpers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MathFn {
    Floor,
    Round,
    Sqrt,
    Sin,
    Cos,
    Tan,
}

impl MathFn {
    pub fn keyword(self) -> &'static str {
        match self {
            MathFn::Floor => "floor",
            MathFn::Round => "round",
            MathFn::Sqrt => "sqrt",
            MathFn::Sin => "sin",
            MathFn::Cos => "cos",
            MathFn::Tan => "tan",
        }
    }
}

/// One-argument string helpers. Numbers are stringified before applying.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextFn {
    Tokenize,
    Uppercase,
    Lowercase,
    Reverse,
}

impl TextFn {
    pub fn keyword(self) -> &'static str {
        match self {
            TextFn::Tokenize => "tokenize",
            TextFn::Uppercase => "uppercase",
            TextFn::Lowercase => "lowercase",
            TextFn::Reverse => "reverse",
        }
    }
}
