// ============================================================================
// Domain Module
// Number format configuration, recognized numbers and error types
// ============================================================================

pub mod config;
pub mod errors;
pub mod number;

pub use config::ValidatorConfig;
pub use errors::{ConfigError, ConfigResult, Rejection};
pub use number::{ParsedNumber, Sign};
