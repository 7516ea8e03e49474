#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while configuring a scanner.
pub enum ConfigError {
    /// The decimal separator is a letter, digit, whitespace, control
    /// character, operator or bracket and would make literals ambiguous.
    InvalidDecimalSeparator {
        /// The rejected separator.
        separator: char,
    },
    /// No decimal separator is known for the locale tag.
    UnknownLocale {
        /// The tag as given by the caller.
        tag: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDecimalSeparator { separator } => write!(f,
                                                                  "Error: {separator:?} cannot be used as a decimal separator."),

            Self::UnknownLocale { tag } => {
                write!(f, "Error: No decimal separator is known for locale '{tag}'.")
            },
        }
    }
}

impl std::error::Error for ConfigError {}
