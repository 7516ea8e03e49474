/// Scanner configuration.
///
/// Holds the decimal separator and the strictness mode a scanner is built
/// with, and maps locale tags to their conventional decimal separator. The
/// library never consults the process locale; callers pass it in here.
///
/// # Responsibilities
/// - Validates that the decimal separator cannot be confused with any other
///   character class.
/// - Chooses between lenient and strict handling of unusable input.
pub mod config;
/// The scanning pass.
///
/// Walks the lexemes of a formula once, tracking whether an operand or an
/// operator is expected next, and turns them into tokens.
///
/// # Responsibilities
/// - Assembles numeric literals from digit runs and decimal separators,
///   fusing a leading minus where an operand is expected.
/// - Re-examines the piece that ended a literal or an identifier with the
///   remaining classifiers, so `2x` and `3)` scan without gaps.
/// - Skips or reports malformed literals and unrecognized characters
///   according to the configured mode.
pub mod core;
/// Raw character classes.
///
/// Splits the input into maximal runs of digits, letters, whitespace and
/// single symbols with `logos`, tracking character offsets.
pub mod lexeme;
/// The token data model.
///
/// Declares [`Token`](token::Token), its tagged payload and its kind.
pub mod token;
