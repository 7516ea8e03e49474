//! # formulex
//!
//! formulex is a lexical scanner for arithmetic formulas written in Rust.
//! It turns a formula such as `-3*(x1 + 2,5)` into a sequence of classified,
//! positioned tokens for an expression parser to consume. It tells unary from
//! binary minus, integers from floating-point numbers, and honors a
//! configurable decimal separator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ScanError,
    scanner::{core::Scanner, token::Token},
};

/// Provides error types for configuring and running a scan.
///
/// This module defines every error the crate can return. Scan errors carry
/// the character position they refer to, so callers can point at the
/// offending part of a formula.
///
/// # Responsibilities
/// - Defines error enums for scanning and for configuration.
/// - Attaches positions and the offending text for context.
/// - Implements the standard error traits for use with `?` and reporting.
pub mod error;
/// Turns formulas into tokens.
///
/// This module ties together the raw lexeme layer, the scanning state
/// machine, the token data model and the scanner configuration.
///
/// # Responsibilities
/// - Exposes [`Scanner`] as the entry point for scanning.
/// - Defines the [`Token`] values handed to downstream parsers.
pub mod scanner;
/// Numeric literal helpers.
///
/// This module converts literal text into integer or floating-point values
/// under a given decimal separator.
pub mod util;

/// Scans a formula with the default configuration.
///
/// The default scanner uses `.` as decimal separator and skips malformed
/// literals and unrecognized characters instead of failing.
///
/// # Errors
/// Returns [`ScanError::EmptyInput`] if `formula` is empty.
///
/// # Examples
/// ```
/// use formulex::{scan, scanner::token::TokenKind};
///
/// let kinds: Vec<_> = scan("x1+2.5").unwrap().iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier, TokenKind::Operator, TokenKind::FloatingPoint]);
///
/// assert!(scan("").is_err());
/// ```
pub fn scan(formula: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::default().scan(formula)
}
