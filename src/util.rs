/// Numeric literal helpers.
///
/// This module turns the text of a numeric literal, as collected by the
/// scanner, into an integer or floating-point value. Integers are tried
/// first; only text that does not fit an `i64` falls back to `f64`, honoring
/// the configured decimal separator.
///
/// All functions return an `Option`, which is `None` if the text is not a
/// valid literal of the requested kind.
pub mod num;
