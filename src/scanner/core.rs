use std::iter::Peekable;

use ordered_float::OrderedFloat;

use crate::{
    error::{ConfigError, ScanError},
    scanner::{
        config::{Mode, ScannerConfig},
        lexeme::{Lexeme, Piece, Pieces},
        token::{Operator, Token, TokenValue},
    },
    util::num::{Literal, parse_literal},
};

pub type ScanResult<T> = Result<T, ScanError>;

/// Converts formulas into token sequences.
///
/// A scanner holds nothing but its configuration, so one instance can be
/// reused for any number of scans and shared between threads.
///
/// # Examples
/// ```
/// use formulex::scanner::{
///     core::Scanner,
///     token::{Operator, Token, TokenValue},
/// };
///
/// let tokens = Scanner::default().scan("-3*4").unwrap();
/// assert_eq!(tokens,
///            vec![Token::new(TokenValue::Integer(-3), 0, 2),
///                 Token::new(TokenValue::Operator(Operator::Multiply), 2, 1),
///                 Token::new(TokenValue::Integer(4), 3, 1),]);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scanner {
    config: ScannerConfig,
}

impl Scanner {
    /// Creates a scanner with the given configuration.
    #[must_use]
    pub const fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// Creates a lenient scanner using `separator` as decimal separator.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDecimalSeparator`] if the separator
    /// collides with a character the scanner already gives a meaning to.
    pub fn with_decimal_separator(separator: char) -> Result<Self, ConfigError> {
        ScannerConfig::default().with_decimal_separator(separator).map(Self::new)
    }

    /// Returns the scanner's configuration.
    #[must_use]
    pub const fn config(&self) -> ScannerConfig {
        self.config
    }

    /// Scans `formula` into tokens, in order of their position.
    ///
    /// # Errors
    /// - [`ScanError::EmptyInput`] if `formula` is empty.
    /// - In [`Mode::Strict`] only: [`ScanError::MalformedNumber`] for a run
    ///   of digits and separators that is not a number, and
    ///   [`ScanError::UnexpectedCharacter`] for a character with no meaning
    ///   in a formula. Lenient scans skip both.
    pub fn scan(&self, formula: &str) -> ScanResult<Vec<Token>> {
        if formula.is_empty() {
            return Err(ScanError::EmptyInput);
        }
        Pass::new(self.config, formula).run()
    }

    /// Like [`scan`](Self::scan), treating an absent formula as empty.
    ///
    /// # Errors
    /// See [`scan`](Self::scan).
    pub fn scan_opt(&self, formula: Option<&str>) -> ScanResult<Vec<Token>> {
        formula.map_or(Err(ScanError::EmptyInput), |formula| self.scan(formula))
    }
}

/// Whether the next token may begin a new operand. Decides if a `-` is
/// fused into the literal after it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    ExpectOperand,
    ExpectOperator,
}

/// Where the classifier chain starts for a piece.
///
/// The piece that ends a literal is offered to the identifier classifier
/// next, and the piece that ends an identifier only to the symbol
/// classifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Literal,
    Identifier,
    Symbol,
}

/// A single scan over one formula.
struct Pass<'s> {
    config: ScannerConfig,
    pieces: Peekable<Pieces<'s>>,
    tokens: Vec<Token>,
    state:  State,
}

impl<'s> Pass<'s> {
    fn new(config: ScannerConfig, formula: &'s str) -> Self {
        Self { config,
               pieces: Pieces::new(formula).peekable(),
               tokens: Vec::new(),
               state: State::ExpectOperand }
    }

    fn run(mut self) -> ScanResult<Vec<Token>> {
        let mut stage = Stage::Literal;
        while let Some(piece) = self.pieces.next() {
            stage = self.classify(piece, stage)?;
        }
        Ok(self.tokens)
    }

    /// Offers `piece` to the classifiers from `stage` on and returns the
    /// stage the following piece starts at.
    fn classify(&mut self, piece: Piece<'s>, stage: Stage) -> ScanResult<Stage> {
        if stage == Stage::Literal && self.starts_literal(&piece) {
            self.literal(piece)?;
            return Ok(Stage::Identifier);
        }

        if stage <= Stage::Identifier && piece.lexeme == Lexeme::Word {
            self.push(TokenValue::Identifier(piece.text.to_string()), piece.start, piece.length);
            return Ok(Stage::Symbol);
        }

        self.symbol(piece)
    }

    fn starts_literal(&self, piece: &Piece<'s>) -> bool {
        match piece.lexeme {
            Lexeme::Digits => true,
            Lexeme::Other(c) => c == self.config.decimal_separator(),
            Lexeme::Operator(Operator::Subtract) => self.state == State::ExpectOperand,
            _ => false,
        }
    }

    /// Collects the literal starting at `first` and emits it as a number. A
    /// lone `-` that no digits followed becomes an operator.
    fn literal(&mut self, first: Piece<'s>) -> ScanResult<()> {
        let separator = self.config.decimal_separator();
        let mut text = String::from(first.text);
        let mut length = first.length;

        while let Some(next) = self.pieces.next_if(|p| match p.lexeme {
                                              Lexeme::Digits => true,
                                              Lexeme::Other(c) => c == separator,
                                              _ => false,
                                          })
        {
            text.push_str(next.text);
            length += next.length;
        }

        match parse_literal(&text, separator) {
            Some(Literal::Integer(n)) => self.push(TokenValue::Integer(n), first.start, length),
            Some(Literal::FloatingPoint(x)) => {
                self.push(TokenValue::FloatingPoint(OrderedFloat(x)), first.start, length);
            },
            None if text == "-" => {
                self.push(TokenValue::Operator(Operator::Subtract), first.start, 1);
            },
            None => self.reject(ScanError::MalformedNumber { text,
                                                              position: first.start })?,
        }
        Ok(())
    }

    fn symbol(&mut self, piece: Piece<'s>) -> ScanResult<Stage> {
        match piece.lexeme {
            Lexeme::Whitespace => {},
            Lexeme::Operator(op) => self.push(TokenValue::Operator(op), piece.start, 1),
            Lexeme::LeftBracket => self.push(TokenValue::LeftBracket, piece.start, 1),
            Lexeme::RightBracket => self.push(TokenValue::RightBracket, piece.start, 1),
            Lexeme::Other(character) => {
                self.reject(ScanError::UnexpectedCharacter { character,
                                                             position: piece.start })?;
            },
            // Digits and words never directly follow a word.
            Lexeme::Digits | Lexeme::Word => return self.classify(piece, Stage::Literal),
        }
        Ok(Stage::Literal)
    }

    fn push(&mut self, value: TokenValue, start: usize, length: usize) {
        self.state = match value {
            TokenValue::Operator(_) | TokenValue::LeftBracket => State::ExpectOperand,
            TokenValue::Integer(_)
            | TokenValue::FloatingPoint(_)
            | TokenValue::Identifier(_)
            | TokenValue::RightBracket => State::ExpectOperator,
        };
        self.tokens.push(Token::new(value, start, length));
    }

    /// Skips the offending text in lenient mode, fails in strict mode.
    fn reject(&self, error: ScanError) -> ScanResult<()> {
        match self.config.mode() {
            Mode::Lenient => Ok(()),
            Mode::Strict => Err(error),
        }
    }
}
