// ============================================================================
// Number Validator Library
// Structural validation of decimal numbers against N(m,k) formats
// ============================================================================

//! # Number Validator
//!
//! Checks whether a text token is a decimal number fitting an `N(m,k)`
//! format: at most `m` significant characters (sign, integer digits and
//! fractional digits, separator excluded), at most `k` of them fractional.
//!
//! ## Features
//!
//! - **Construction-time checks**: `0 <= scale < precision` is enforced once
//! - **Pure predicate**: validation never errors, malformed input is `false`
//! - **Both separators**: `.` and `,` are accepted
//! - **Diagnostics**: [`NumberValidator::check`] reports which rule failed
//! - **Notation**: formats parse from and print as `N(m,k)`
//!
//! ## Example
//!
//! ```rust
//! use number_validator::prelude::*;
//!
//! let validator = NumberValidator::new(17, 2, true)?;
//!
//! assert!(validator.is_valid_number("0.0"));
//! assert!(validator.is_valid_number("0,0"));
//! assert!(!validator.is_valid_number("-1.0"));
//! assert!(!validator.is_valid_number(None));
//!
//! assert_eq!(validator.check("0.000"), Err(Rejection::ScaleExceeded { fraction: 3, scale: 2 }));
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Cargo features
//!
//! - `serde`: (de)serialize [`ValidatorConfig`], validating on the way in
//! - `logging`: `utils::init_logging` console subscriber via `tracing-subscriber`

pub mod domain;
pub mod engine;
pub mod utils;

pub use domain::{ConfigError, ConfigResult, ParsedNumber, Rejection, Sign, ValidatorConfig};
pub use engine::{recognize, NumberValidator};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigResult, ParsedNumber, Rejection, Sign, ValidatorConfig,
    };
    pub use crate::engine::{recognize, NumberValidator};
}
