#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning a formula.
///
/// Positions are zero-based offsets counted in characters, matching
/// [`Token::start`](crate::scanner::token::Token::start).
pub enum ScanError {
    /// The formula was empty (or absent), so there is nothing to scan.
    EmptyInput,
    /// A run of digits and decimal separators that is neither an integer nor
    /// a floating-point number. Only reported in strict mode.
    MalformedNumber {
        /// The rejected literal text, including a leading minus if one was
        /// fused into it.
        text:     String,
        /// Offset of the first character of the literal.
        position: usize,
    },
    /// A character with no meaning in a formula. Only reported in strict
    /// mode.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Offset of the character.
        position:  usize,
    },
}

impl ScanError {
    /// Returns the input offset the error refers to, if it refers to one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::MalformedNumber { position, .. } | Self::UnexpectedCharacter { position, .. } => {
                Some(*position)
            },
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: The formula is empty."),

            Self::MalformedNumber { text, position } => {
                write!(f, "Error at position {position}: Malformed number '{text}'.")
            },

            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Error at position {position}: Unexpected character {character:?}."),
        }
    }
}

impl std::error::Error for ScanError {}
