//! Token definitions.
//!
//! The lexer produces [`Token`]s lazily; the parser holds exactly one of
//! them as lookahead. Literal payloads travel inside the kind.

use std::fmt;

use crate::{BinaryOp, MathFn, Span, TextFn};

/// A token with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Every token the language knows. Closed: the lexer never produces
/// anything outside this set.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Number(f64),
    Str(String),
    Bool(bool),
    Ident(String),

    // Declarations and output
    Let,
    Make,
    Show,
    Error,
    Alert,

    // Control flow
    If,
    Else,
    Loop,
    While,
    Func,
    Return,
    Async,

    // Environment management
    DelVar,
    DelFunc,
    Connect,

    // Value forms
    Read,
    ArrAdd,
    ArrDel,
    ArrSize,
    ToJson,
    ParJson,
    Math(MathFn),
    Text(TextFn),
    Void,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,

    // Operators
    Assign,
    EqEq,
    EqEqEq,
    NotEq,
    NotEqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    Caret,
    AmpAmp,
    PipePipe,
    Bang,
}

impl TokenKind {
    /// Compare kinds ignoring literal payloads.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// The binary operator this token spells, if any.
    pub fn binary_op(&self) -> Option<BinaryOp> {
        let op = match self {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Mod,
            TokenKind::StarStar => BinaryOp::Pow,
            TokenKind::Caret => BinaryOp::BitXor,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::EqEqEq => BinaryOp::StrictEq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::NotEqEq => BinaryOp::StrictNotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::AmpAmp => BinaryOp::And,
            TokenKind::PipePipe => BinaryOp::Or,
            _ => return None,
        };
        Some(op)
    }

    /// Human-readable name used in syntax errors.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number",
            TokenKind::Str(_) => "string",
            TokenKind::Bool(_) => "boolean",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Let => "`let`",
            TokenKind::Make => "`make`",
            TokenKind::Show => "`show`",
            TokenKind::Error => "`error`",
            TokenKind::Alert => "`alert`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Loop => "`loop`",
            TokenKind::While => "`while`",
            TokenKind::Func => "`func`",
            TokenKind::Return => "`return`",
            TokenKind::Async => "`async`",
            TokenKind::DelVar => "`delvar`",
            TokenKind::DelFunc => "`delfunc`",
            TokenKind::Connect => "`connect`",
            TokenKind::Read => "`read`",
            TokenKind::ArrAdd => "`arradd`",
            TokenKind::ArrDel => "`arrdel`",
            TokenKind::ArrSize => "`arrsize`",
            TokenKind::ToJson => "`tojson`",
            TokenKind::ParJson => "`parjson`",
            TokenKind::Math(f) => f.keyword(),
            TokenKind::Text(f) => f.keyword(),
            TokenKind::Void => "`void`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Assign => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::EqEqEq => "`===`",
            TokenKind::NotEq => "`!=`",
            TokenKind::NotEqEq => "`!==`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::StarStar => "`**`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Caret => "`^`",
            TokenKind::AmpAmp => "`&&`",
            TokenKind::PipePipe => "`||`",
            TokenKind::Bang => "`!`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Str(s) => write!(f, "string \"{s}\""),
            TokenKind::Bool(b) => write!(f, "boolean {b}"),
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            other => f.write_str(other.display_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_kind_ignores_payload() {
        let a = TokenKind::Ident("x".to_string());
        let b = TokenKind::Ident("y".to_string());
        assert!(a.same_kind(&b));
        assert!(!a.same_kind(&TokenKind::Number(1.0)));
    }

    #[test]
    fn operators_map_to_binary_ops() {
        assert_eq!(TokenKind::StarStar.binary_op(), Some(BinaryOp::Pow));
        assert_eq!(TokenKind::NotEqEq.binary_op(), Some(BinaryOp::StrictNotEq));
        assert_eq!(TokenKind::Bang.binary_op(), None);
        assert_eq!(TokenKind::Assign.binary_op(), None);
    }

    #[test]
    fn display_includes_literal() {
        assert_eq!(
            TokenKind::Ident("count".to_string()).to_string(),
            "identifier `count`"
        );
        assert_eq!(TokenKind::RBrace.to_string(), "`}`");
    }
}
