use super::error::{LexError, SourcePosition};
use crate::common::*;
use crate::narrative::Pool;
use logos::{Lexer as LogosLexer, Logos, Span};

#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("d")]
    Dice,
    #[token("df")]
    Fudge,
    #[token("!")]
    Explode,
    #[token("kh")]
    #[token("k")]
    #[token("b")]
    KeepHighest,
    #[token("kl")]
    #[token("w")]
    KeepLowest,
    #[token(">")]
    GreaterThan,
    #[token("e")]
    Equal,

    #[token("swa", |_| Pool::Ability)]
    #[token("swd", |_| Pool::Difficulty)]
    #[token("swp", |_| Pool::Proficiency)]
    #[token("swc", |_| Pool::Challenge)]
    #[token("swb", |_| Pool::Boost)]
    #[token("sws", |_| Pool::Setback)]
    Narrative(Pool),
    #[token("gm")]
    Oracle,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    fn as_operator(self) -> Option<Operator> {
        use Operator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            Self::Dice => Dice,
            Self::Fudge => Fudge,
            Self::Explode => Explode,
            Self::KeepHighest => KeepHighest,
            Self::KeepLowest => KeepLowest,
            Self::GreaterThan => GreaterThan,
            Self::Equal => Equal,
            Self::Narrative(pool) => Narrative(pool),
            Self::Oracle => Oracle,
            Self::Integer | Self::LeftParen | Self::RightParen | Self::Error => return None,
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Integer(Int),
    Operator(Operator),
    LeftParen,
    RightParen,
}

/// Lazily splits dice notation into tokens.
///
/// The tokenizer expects lowercase input; [`parse`](super::parse) normalizes case before
/// lexing. Once it has yielded an error its output should not be trusted further.
pub struct Tokenizer<'a> {
    lexer: LogosLexer<'a, TokenKind>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: TokenKind::lexer(source),
        }
    }

    /// Position just past the end of the input, for errors found after the last token.
    pub(crate) fn end(&self) -> Span {
        let len = self.lexer.source().len();
        len..len
    }

    pub(crate) fn slice_at(&self, span: &Span) -> &'a str {
        self.lexer.source().get(span.clone()).unwrap_or_default()
    }

    fn position(&self) -> SourcePosition {
        SourcePosition::new(self.lexer.span(), self.lexer.slice())
    }

    fn token(&self, kind: TokenKind) -> Result<Token, LexError> {
        match kind {
            TokenKind::Integer => self
                .lexer
                .slice()
                .parse()
                .map(Token::Integer)
                .map_err(|_| LexError::IntegerTooLarge(self.position())),
            TokenKind::LeftParen => Ok(Token::LeftParen),
            TokenKind::RightParen => Ok(Token::RightParen),
            TokenKind::Error => Err(LexError::Unrecognized(self.position())),
            other => other
                .as_operator()
                .map(Token::Operator)
                .ok_or_else(|| LexError::Unrecognized(self.position())),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<(Token, Span), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.lexer.next()?;
        Some(self.token(kind).map(|token| (token, self.lexer.span())))
    }
}
