//! Tokenizer for KorvaqScrip.
//!
//! [`Lexer`] is a lazy iterator over `Result<Token, LexError>`: the parser
//! pulls one token at a time and stops at the first error. Restarting means
//! building a new `Lexer` over the same source.
//!
//! Whitespace, `;` and `//` comments never reach the parser. Restricted
//! words (see [`lookup_restricted_word`]) are rejected here so the parser
//! never sees them as identifiers.

mod lex_error;
mod raw_token;
mod restricted;

use kq_ir::{MathFn, Span, TextFn, Token, TokenKind};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};
pub use restricted::{is_restricted_word, lookup_restricted_word};

use raw_token::RawToken;

/// Lazy token stream over one source text.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
        }
    }

    /// The source text this lexer reads.
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }

    /// Byte length of the source, used as the end-of-input position.
    pub fn end_offset(&self) -> u32 {
        u32::try_from(self.inner.source().len()).unwrap_or(u32::MAX)
    }

    fn convert(&self, raw: RawToken, span: Span) -> Result<Option<TokenKind>, LexError> {
        let slice = self.inner.slice();
        let kind = match raw {
            RawToken::LineComment => return Ok(None),

            RawToken::Let => TokenKind::Let,
            RawToken::Make => TokenKind::Make,
            RawToken::Show => TokenKind::Show,
            RawToken::Error => TokenKind::Error,
            RawToken::Alert => TokenKind::Alert,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::Loop => TokenKind::Loop,
            RawToken::While => TokenKind::While,
            RawToken::Func => TokenKind::Func,
            RawToken::Return => TokenKind::Return,
            RawToken::Async => TokenKind::Async,
            RawToken::DelVar => TokenKind::DelVar,
            RawToken::DelFunc => TokenKind::DelFunc,
            RawToken::Connect => TokenKind::Connect,
            RawToken::Read => TokenKind::Read,
            RawToken::ArrAdd => TokenKind::ArrAdd,
            RawToken::ArrDel => TokenKind::ArrDel,
            RawToken::ArrSize => TokenKind::ArrSize,
            RawToken::ToJson => TokenKind::ToJson,
            RawToken::ParJson => TokenKind::ParJson,
            RawToken::Floor => TokenKind::Math(MathFn::Floor),
            RawToken::Round => TokenKind::Math(MathFn::Round),
            RawToken::Sqrt => TokenKind::Math(MathFn::Sqrt),
            RawToken::Sin => TokenKind::Math(MathFn::Sin),
            RawToken::Cos => TokenKind::Math(MathFn::Cos),
            RawToken::Tan => TokenKind::Math(MathFn::Tan),
            RawToken::Tokenize => TokenKind::Text(TextFn::Tokenize),
            RawToken::Uppercase => TokenKind::Text(TextFn::Uppercase),
            RawToken::Lowercase => TokenKind::Text(TextFn::Lowercase),
            RawToken::Reverse => TokenKind::Text(TextFn::Reverse),

            RawToken::True => TokenKind::Bool(true),
            RawToken::False => TokenKind::Bool(false),
            RawToken::Void => TokenKind::Void,
            RawToken::Number => match slice.parse::<f64>() {
                Ok(n) => TokenKind::Number(n),
                Err(_) => return Err(LexError::unexpected_char(first_char(slice), span)),
            },
            RawToken::String => {
                // Delimiters are single-byte ASCII quotes.
                TokenKind::Str(slice[1..slice.len() - 1].to_string())
            }
            RawToken::UnterminatedString => {
                return Err(LexError::unterminated_string(first_char(slice), span));
            }
            RawToken::Ident => {
                if let Some(hint) = lookup_restricted_word(slice) {
                    return Err(LexError::restricted_word(slice, hint, span));
                }
                TokenKind::Ident(slice.to_string())
            }

            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Comma => TokenKind::Comma,

            RawToken::Assign => TokenKind::Assign,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::EqEqEq => TokenKind::EqEqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::NotEqEq => TokenKind::NotEqEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::StarStar => TokenKind::StarStar,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Caret => TokenKind::Caret,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::Bang => TokenKind::Bang,
        };
        Ok(Some(kind))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.inner.next()?;
            let span = Span::from_range(self.inner.span());
            let result = match raw {
                Ok(raw) => self.convert(raw, span),
                Err(()) => Err(LexError::unexpected_char(
                    first_char(self.inner.slice()),
                    span,
                )),
            };
            match result {
                Ok(Some(kind)) => return Some(Ok(Token::new(kind, span))),
                Ok(None) => {}
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

fn first_char(slice: &str) -> char {
    slice.chars().next().unwrap_or('\0')
}

/// Tokenize a whole source text, stopping at the first error.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
