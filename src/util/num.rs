use std::borrow::Cow;

/// A successfully parsed numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// The text fit a signed 64-bit integer.
    Integer(i64),
    /// The text needed a fractional part or exceeded the `i64` range.
    FloatingPoint(f64),
}

/// Parses an integer literal: an optional leading minus followed by decimal
/// digits.
///
/// ## Parameters
/// - `text`: The literal text.
///
/// ## Returns
/// - `Some(i64)`: The value if `text` is a valid integer within range.
/// - `None`: If `text` contains anything else or overflows.
///
/// ## Example
/// ```
/// use formulex::util::num::parse_integer;
///
/// assert_eq!(parse_integer("-42"), Some(-42));
/// assert_eq!(parse_integer("4.2"), None);
/// assert_eq!(parse_integer("+4"), None);
/// assert_eq!(parse_integer("99999999999999999999"), None);
/// ```
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parses a floating-point literal written with the given decimal separator.
///
/// Accepts an optional leading minus, decimal digits and at most one
/// separator. Either side of the separator may be empty, but at least one
/// digit must be present, so `"5."` and `".5"` are valid while `"."` is not.
/// Exponents, grouping characters and special values such as `inf` are
/// rejected.
///
/// ## Parameters
/// - `text`: The literal text.
/// - `separator`: The decimal separator the text was written with.
///
/// ## Returns
/// - `Some(f64)`: The parsed value. Literals too large for `f64` saturate to
///   infinity.
/// - `None`: If the text is not a valid literal.
///
/// ## Example
/// ```
/// use formulex::util::num::parse_floating_point;
///
/// assert_eq!(parse_floating_point("2.5", '.'), Some(2.5));
/// assert_eq!(parse_floating_point("-2,5", ','), Some(-2.5));
/// assert_eq!(parse_floating_point(",5", ','), Some(0.5));
/// assert_eq!(parse_floating_point("1.2.3", '.'), None);
/// assert_eq!(parse_floating_point("2.5", ','), None);
/// ```
#[must_use]
pub fn parse_floating_point(text: &str, separator: char) -> Option<f64> {
    let body = text.strip_prefix('-').unwrap_or(text);

    let mut digits = 0usize;
    let mut separators = 0usize;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            c if c == separator => separators += 1,
            _ => return None,
        }
    }
    if digits == 0 || separators > 1 {
        return None;
    }

    let normalized = if separator == '.' {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.replace(separator, "."))
    };
    normalized.parse().ok()
}

/// Parses literal text the way the scanner does: as an integer if possible,
/// otherwise as a floating-point number.
///
/// ## Example
/// ```
/// use formulex::util::num::{Literal, parse_literal};
///
/// assert_eq!(parse_literal("12", '.'), Some(Literal::Integer(12)));
/// assert_eq!(parse_literal("1.5", '.'), Some(Literal::FloatingPoint(1.5)));
/// assert_eq!(parse_literal("-", '.'), None);
/// ```
#[must_use]
pub fn parse_literal(text: &str, separator: char) -> Option<Literal> {
    parse_integer(text).map(Literal::Integer)
                       .or_else(|| parse_floating_point(text, separator).map(Literal::FloatingPoint))
}
