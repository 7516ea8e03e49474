/// Scanning errors.
///
/// Defines the errors that can be raised while turning a formula into tokens.
/// In lenient mode only the empty-input check ever fails; strict mode also
/// reports malformed numeric literals and unrecognized characters together
/// with their position in the input.
pub mod scan_error;
/// Configuration errors.
///
/// Raised while building a scanner configuration, for example when the
/// requested decimal separator would collide with a character the scanner
/// already gives a meaning to.
pub mod config_error;

pub use config_error::ConfigError;
pub use scan_error::ScanError;
