// ============================================================================
// Validator Errors
// Configuration failures and validation rejection reasons
// ============================================================================

use thiserror::Error;

/// Errors raised while building a validator configuration.
///
/// These only ever surface at construction time. Once a validator exists,
/// validating text never produces a `ConfigError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConfigError {
    /// Precision was zero or negative
    #[error("precision must be a positive number, got {precision}")]
    NonPositivePrecision { precision: i64 },

    /// Scale was negative or not strictly below precision
    #[error(
        "scale must be a non-negative number less than precision, got scale {scale} for precision {precision}"
    )]
    ScaleOutOfRange { precision: i64, scale: i64 },

    /// Precision does not fit the platform word
    #[error("precision {precision} is too large for this platform")]
    PrecisionTooLarge { precision: i64 },

    /// `N(m,k)` notation could not be parsed
    #[error("invalid number format notation: expected N(m) or N(m,k)")]
    InvalidNotation,
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Why a piece of text was not accepted as a number.
///
/// A rejection is an ordinary negative answer, not a failure of the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// Input was absent or empty
    #[error("input is empty")]
    Empty,

    /// Input does not have the shape `[+-]digits[(.|,)digits]`
    #[error("input is not a decimal number")]
    Malformed,

    /// Sign, integer and fractional digits together exceed the precision
    #[error("number has {length} significant characters, precision allows {precision}")]
    PrecisionExceeded { length: usize, precision: usize },

    /// Too many digits after the separator
    #[error("number has {fraction} fractional digits, scale allows {scale}")]
    ScaleExceeded { fraction: usize, scale: usize },

    /// Negative number given to a positive-only validator
    #[error("negative numbers are not allowed")]
    NegativeNotAllowed,
}
