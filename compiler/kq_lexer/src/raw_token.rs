//! Raw Token Definition
//!
//! The logos-derived token enum. Carries no payloads; literal text is read
//! back from the lexer slice when converting to [`kq_ir::TokenKind`].

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n;]+")] // Whitespace and statement terminators
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    // Declarations and output
    #[token("let")]
    Let,
    #[token("make")]
    Make,
    #[token("show")]
    Show,
    #[token("error")]
    Error,
    #[token("alert")]
    Alert,

    // Control flow
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("loop")]
    Loop,
    #[token("while")]
    While,
    #[token("func")]
    Func,
    #[token("return")]
    Return,
    #[token("async")]
    Async,

    // Environment management
    #[token("delvar")]
    DelVar,
    #[token("delfunc")]
    DelFunc,
    #[token("connect")]
    Connect,

    // Value forms
    #[token("read")]
    Read,
    #[token("arradd")]
    ArrAdd,
    #[token("arrdel")]
    ArrDel,
    #[token("arrsize")]
    ArrSize,
    #[token("tojson")]
    ToJson,
    #[token("parjson")]
    ParJson,
    #[token("floor")]
    Floor,
    #[token("round")]
    Round,
    #[token("sqrt")]
    Sqrt,
    #[token("sin")]
    Sin,
    #[token("cos")]
    Cos,
    #[token("tan")]
    Tan,
    #[token("tokenize")]
    Tokenize,
    #[token("uppercase")]
    Uppercase,
    #[token("lowercase")]
    Lowercase,
    #[token("reverse")]
    Reverse,

    // Literals
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("void")]
    Void,
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    #[regex(r"`[^`]*`")]
    String,
    /// Opening quote with no matching close before end of input.
    #[regex(r#""[^"]*"#)]
    #[regex(r"'[^']*")]
    #[regex(r"`[^`]*")]
    UnterminatedString,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,

    // Operators
    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("===")]
    EqEqEq,
    #[token("!=")]
    NotEq,
    #[token("!==")]
    NotEqEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    StarStar,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,
}
