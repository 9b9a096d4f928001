// ============================================================================
// Number Validator
// Applies an N(m,k) format to recognized numbers
// ============================================================================

use super::recognizer::recognize;
use crate::domain::{ConfigResult, ParsedNumber, Rejection, ValidatorConfig};
use std::str::FromStr;

/// Validates text against a fixed `N(m,k)` number format.
///
/// The configuration is checked once at construction; afterwards the
/// validator is a pure predicate. It holds no interior state and is
/// `Copy + Send + Sync`, so one instance can be shared across threads
/// freely and separate instances never affect each other.
///
/// # Example
/// ```
/// use number_validator::NumberValidator;
///
/// let validator = NumberValidator::new(4, 2, true)?;
/// assert!(validator.is_valid_number("+0.00"));   // 1 + 1 + 2 == 4
/// assert!(!validator.is_valid_number("-1.0"));   // negatives refused
/// assert!(!validator.is_valid_number(None));
/// # Ok::<(), number_validator::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberValidator {
    config: ValidatorConfig,
}

impl NumberValidator {
    /// Create a validator for `N(precision, scale)`.
    ///
    /// # Errors
    /// Returns the [`ConfigError`](crate::ConfigError) from
    /// [`ValidatorConfig::new`] when `precision <= 0`, `scale < 0` or
    /// `scale >= precision`.
    pub fn new(precision: i64, scale: i64, only_positive: bool) -> ConfigResult<Self> {
        match ValidatorConfig::new(precision, scale, only_positive) {
            Ok(config) => Ok(Self::from_config(config)),
            Err(err) => {
                tracing::debug!(
                    precision,
                    scale,
                    only_positive,
                    error = %err,
                    "rejected number validator configuration"
                );
                Err(err)
            }
        }
    }

    /// Integer validator `N(precision)` accepting negatives
    pub fn with_precision(precision: i64) -> ConfigResult<Self> {
        Self::new(precision, 0, false)
    }

    /// Wrap an already validated configuration
    pub fn from_config(config: ValidatorConfig) -> Self {
        tracing::debug!(
            precision = config.precision(),
            scale = config.scale(),
            only_positive = config.only_positive(),
            "created number validator"
        );
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate `value`, returning the recognized number or the first rule
    /// it broke.
    ///
    /// Rules are applied in order: empty input, shape, precision, scale,
    /// sign policy.
    pub fn check<'a>(
        &self,
        value: impl Into<Option<&'a str>>,
    ) -> Result<ParsedNumber<'a>, Rejection> {
        let result = self.evaluate(value.into());
        if let Err(rejection) = &result {
            tracing::trace!(format = %self.config, %rejection, "number rejected");
        }
        result
    }

    /// `true` when `value` conforms to the format.
    ///
    /// Never fails: absent, empty or malformed input is simply `false`.
    #[inline]
    pub fn is_valid_number<'a>(&self, value: impl Into<Option<&'a str>>) -> bool {
        self.check(value).is_ok()
    }

    fn evaluate<'a>(&self, value: Option<&'a str>) -> Result<ParsedNumber<'a>, Rejection> {
        let text = match value {
            Some(text) if !text.is_empty() => text,
            _ => return Err(Rejection::Empty),
        };

        let number = recognize(text).ok_or(Rejection::Malformed)?;

        let length = number.total_len();
        if length > self.config.precision() {
            return Err(Rejection::PrecisionExceeded {
                length,
                precision: self.config.precision(),
            });
        }

        let fraction = number.fraction_len();
        if fraction > self.config.scale() {
            return Err(Rejection::ScaleExceeded {
                fraction,
                scale: self.config.scale(),
            });
        }

        if self.config.only_positive() && number.is_negative() {
            return Err(Rejection::NegativeNotAllowed);
        }

        Ok(number)
    }
}

impl From<ValidatorConfig> for NumberValidator {
    fn from(config: ValidatorConfig) -> Self {
        Self::from_config(config)
    }
}

impl FromStr for NumberValidator {
    type Err = crate::domain::ConfigError;

    /// Build from `N(m)` / `N(m,k)` notation; negatives are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ValidatorConfig>().map(Self::from_config)
    }
}
