use std::{fmt, ops::Range};

use ordered_float::OrderedFloat;

/// The six arithmetic operator symbols a formula may contain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `%`
    Modulo,
}

impl Operator {
    /// Every operator, in symbol order `+ - * / ^ %`.
    pub const ALL: [Self; 6] =
        [Self::Add, Self::Subtract, Self::Multiply, Self::Divide, Self::Power, Self::Modulo];

    /// Returns the operator written as `symbol`, if any.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Returns the character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
            Self::Modulo => '%',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The classification of a token, without its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A literal that fit an `i64`.
    Integer,
    /// A literal with a fractional part, or too large for an `i64`.
    FloatingPoint,
    /// A variable or function name.
    Identifier,
    /// One of `+ - * / ^ %`.
    Operator,
    /// `(`
    LeftBracket,
    /// `)`
    RightBracket,
}

impl TokenKind {
    /// Returns `true` for value-producing kinds: numbers and identifiers.
    #[must_use]
    pub const fn is_operand(self) -> bool {
        matches!(self, Self::Integer | Self::FloatingPoint | Self::Identifier)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "Integer",
            Self::FloatingPoint => "FloatingPoint",
            Self::Identifier => "Identifier",
            Self::Operator => "Operator",
            Self::LeftBracket => "LeftBracket",
            Self::RightBracket => "RightBracket",
        };
        f.write_str(name)
    }
}

/// The payload of a token. Each variant corresponds to exactly one
/// [`TokenKind`].
///
/// Floating-point values are wrapped in [`OrderedFloat`] so that tokens can
/// be compared and hashed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// Integer literal, such as `42` or a fused `-3`.
    Integer(i64),
    /// Floating-point literal, such as `2.5` or `.5`.
    FloatingPoint(OrderedFloat<f64>),
    /// Identifier name, such as `x1`.
    Identifier(String),
    /// Arithmetic operator.
    Operator(Operator),
    /// `(`
    LeftBracket,
    /// `)`
    RightBracket,
}

impl TokenValue {
    /// Returns the kind this payload belongs to.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::FloatingPoint(_) => TokenKind::FloatingPoint,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Operator(_) => TokenKind::Operator,
            Self::LeftBracket => TokenKind::LeftBracket,
            Self::RightBracket => TokenKind::RightBracket,
        }
    }

    /// Returns the symbol of an operator or bracket, and `None` for operands.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Operator(op) => Some(op.symbol()),
            Self::LeftBracket => Some('('),
            Self::RightBracket => Some(')'),
            Self::Integer(_) | Self::FloatingPoint(_) | Self::Identifier(_) => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::FloatingPoint(x) => write!(f, "{x}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftBracket => f.write_str("("),
            Self::RightBracket => f.write_str(")"),
        }
    }
}

/// A classified, positioned span of a formula.
///
/// `start` and `length` are counted in characters (Unicode scalar values),
/// not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token's payload, which also determines its kind.
    pub value:  TokenValue,
    /// Offset of the first character of the token.
    pub start:  usize,
    /// Number of characters the token was scanned from.
    pub length: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(value: TokenValue, start: usize, length: usize) -> Self {
        Self { value, start, length }
    }

    /// Returns the token's kind.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    /// Returns the offset one past the token's last character.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    /// Returns the character range the token covers.
    #[must_use]
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end()
    }
}

impl fmt::Display for Token {
    /// Formats the token as `Kind(value) @ start..end`, e.g.
    /// `Integer(-3) @ 0..2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) @ {}..{}", self.kind(), self.value, self.start, self.end())
    }
}
