use crate::{error::ConfigError, scanner::token::Operator};

/// How the scanner treats text that cannot become a token.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Malformed numeric literals and unrecognized characters are skipped
    /// without producing a token.
    #[default]
    Lenient,
    /// Malformed numeric literals and unrecognized characters abort the scan
    /// with a [`ScanError`](crate::error::ScanError).
    Strict,
}

/// Languages whose conventional decimal separator is a comma.
const COMMA_LANGUAGES: &[&str] = &["bg", "ca", "cs", "da", "de", "el", "es", "et", "fi", "fr",
                                   "hr", "hu", "id", "it", "lt", "lv", "nb", "nl", "nn", "no",
                                   "pl", "pt", "ro", "ru", "sk", "sl", "sr", "sv", "tr", "uk",
                                   "vi"];

/// Languages whose conventional decimal separator is a full stop.
const DOT_LANGUAGES: &[&str] =
    &["c", "posix", "en", "ga", "he", "hi", "ja", "ko", "ms", "mt", "th", "zh"];

/// Scanner configuration: the decimal separator and the strictness mode.
///
/// The default uses `.` as decimal separator and [`Mode::Lenient`].
///
/// # Examples
/// ```
/// use formulex::scanner::config::{Mode, ScannerConfig};
///
/// let config = ScannerConfig::for_locale("de-DE").unwrap().with_mode(Mode::Strict);
/// assert_eq!(config.decimal_separator(), ',');
/// assert_eq!(config.mode(), Mode::Strict);
///
/// assert!(ScannerConfig::default().with_decimal_separator('-').is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScannerConfig {
    decimal_separator: char,
    mode:              Mode,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self { decimal_separator: '.',
               mode:              Mode::Lenient, }
    }
}

impl ScannerConfig {
    /// Returns a copy of this configuration using `separator` as decimal
    /// separator.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDecimalSeparator`] if the separator is an
    /// ASCII letter or digit, whitespace, a control character, an operator
    /// symbol or a bracket.
    pub fn with_decimal_separator(self, separator: char) -> Result<Self, ConfigError> {
        if !is_valid_separator(separator) {
            return Err(ConfigError::InvalidDecimalSeparator { separator });
        }
        Ok(Self { decimal_separator: separator,
                  ..self })
    }

    /// Returns a copy of this configuration using `mode`.
    #[must_use]
    pub const fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Returns the lenient configuration for the conventional decimal
    /// separator of a locale.
    ///
    /// Only the language part of the tag is looked at, so `de`, `de-AT` and
    /// `de_DE.UTF-8` all select `,`. The tags `C` and `POSIX` select `.`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownLocale`] if the language is not known.
    pub fn for_locale(tag: &str) -> Result<Self, ConfigError> {
        let language = tag.split(['-', '_', '.', '@'])
                          .next()
                          .unwrap_or_default()
                          .to_ascii_lowercase();

        let separator = if DOT_LANGUAGES.contains(&language.as_str()) {
            '.'
        } else if COMMA_LANGUAGES.contains(&language.as_str()) {
            ','
        } else {
            return Err(ConfigError::UnknownLocale { tag: tag.to_string() });
        };

        Self::default().with_decimal_separator(separator)
    }

    /// Returns the decimal separator.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Returns the strictness mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }
}

fn is_valid_separator(separator: char) -> bool {
    !(separator.is_ascii_alphanumeric()
      || separator.is_whitespace()
      || separator.is_control()
      || matches!(separator, '(' | ')')
      || Operator::from_symbol(separator).is_some())
}
