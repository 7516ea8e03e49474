use logos::Logos;

use crate::scanner::token::Operator;

/// A maximal run of characters of one class.
///
/// Lexemes carry no meaning on their own: the scanner decides whether a
/// `Digits` run is a whole literal or part of one, whether a `-` is fused
/// into the literal that follows it, and whether an `Other` character is the
/// decimal separator. Every character of the input belongs to exactly one
/// lexeme.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// Decimal digits, such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// An ASCII letter followed by ASCII letters and digits, such as `x1`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Word,
    /// `+`, `-`, `*`, `/`, `^` or `%`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Subtract)]
    #[token("*", |_| Operator::Multiply)]
    #[token("/", |_| Operator::Divide)]
    #[token("^", |_| Operator::Power)]
    #[token("%", |_| Operator::Modulo)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LeftBracket,
    /// `)`
    #[token(")")]
    RightBracket,
    /// Spaces, tabs and line breaks.
    #[regex(r"\s+")]
    Whitespace,
    /// Any other single character. The decimal separator arrives here.
    #[regex(r"[^0-9a-zA-Z+\-*/^%()\s]", |lex| lex.slice().chars().next())]
    Other(char),
}

/// A lexeme together with its text and character position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Piece<'s> {
    /// The character class of the run.
    pub lexeme: Lexeme,
    /// The run's text.
    pub text:   &'s str,
    /// Character offset of the run in the input.
    pub start:  usize,
    /// Number of characters in the run.
    pub length: usize,
}

/// Iterator over the [`Piece`]s of a source string.
///
/// Converts the byte spans reported by the lexer into character offsets as
/// it goes.
pub struct Pieces<'s> {
    lexer:  logos::Lexer<'s, Lexeme>,
    offset: usize,
}

impl<'s> Pieces<'s> {
    /// Creates an iterator over the pieces of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { lexer:  Lexeme::lexer(source),
               offset: 0, }
    }
}

impl<'s> Iterator for Pieces<'s> {
    type Item = Piece<'s>;

    fn next(&mut self) -> Option<Piece<'s>> {
        let result = self.lexer.next()?;
        let text = self.lexer.slice();

        // Every character is covered by some pattern; anything the lexer still
        // rejects is handed on as an unrecognized character.
        let lexeme = result.unwrap_or_else(|()| {
                               Lexeme::Other(text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER))
                           });

        let start = self.offset;
        let length = text.chars().count();
        self.offset += length;

        Some(Piece { lexeme,
                     text,
                     start,
                     length })
    }
}
