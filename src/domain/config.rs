// ============================================================================
// Validator Configuration
// Precision, scale and sign policy of an N(m,k) number format
// ============================================================================

use super::errors::{ConfigError, ConfigResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable description of an `N(m,k)` number format.
///
/// - `precision` (m): maximum count of significant characters, meaning the
///   sign (if present) plus integer digits plus fractional digits. The
///   separator is not counted.
/// - `scale` (k): maximum count of fractional digits.
/// - `only_positive`: reject numbers carrying a leading `-`.
///
/// Invariant: `0 <= scale < precision`. Fields are private so a config can
/// only be obtained through [`ValidatorConfig::new`] and friends.
///
/// # Example
/// ```
/// use number_validator::ValidatorConfig;
///
/// let config = ValidatorConfig::new(17, 2, true)?;
/// assert_eq!(config.to_string(), "N(17,2)");
///
/// let parsed: ValidatorConfig = "N(10)".parse()?;
/// assert_eq!(parsed.scale(), 0);
/// # Ok::<(), number_validator::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawValidatorConfig"))]
pub struct ValidatorConfig {
    precision: usize,
    scale: usize,
    only_positive: bool,
}

impl ValidatorConfig {
    /// Create a configuration, checking the precision/scale invariant.
    ///
    /// # Errors
    /// - `NonPositivePrecision` if `precision <= 0`
    /// - `ScaleOutOfRange` if `scale < 0` or `scale >= precision`
    pub fn new(precision: i64, scale: i64, only_positive: bool) -> ConfigResult<Self> {
        if precision <= 0 {
            return Err(ConfigError::NonPositivePrecision { precision });
        }
        if scale < 0 || scale >= precision {
            return Err(ConfigError::ScaleOutOfRange { precision, scale });
        }

        let precision_len =
            usize::try_from(precision).map_err(|_| ConfigError::PrecisionTooLarge { precision })?;
        // 0 <= scale < precision, so this cannot fail once precision fits
        let scale_len =
            usize::try_from(scale).map_err(|_| ConfigError::PrecisionTooLarge { precision })?;

        Ok(Self {
            precision: precision_len,
            scale: scale_len,
            only_positive,
        })
    }

    /// Integer-only format `N(m)`: scale 0, negatives allowed.
    pub fn integer(precision: i64) -> ConfigResult<Self> {
        Self::new(precision, 0, false)
    }

    /// Builder method: Set the sign policy
    pub fn with_only_positive(mut self, only_positive: bool) -> Self {
        self.only_positive = only_positive;
        self
    }

    /// Maximum count of sign + integer + fractional characters
    #[inline]
    pub const fn precision(&self) -> usize {
        self.precision
    }

    /// Maximum count of fractional digits
    #[inline]
    pub const fn scale(&self) -> usize {
        self.scale
    }

    /// Whether a leading minus sign is rejected
    #[inline]
    pub const fn only_positive(&self) -> bool {
        self.only_positive
    }
}

// ============================================================================
// N(m,k) Notation
// ============================================================================

impl fmt::Display for ValidatorConfig {
    /// Renders `N(m,k)`, or `N(m)` for integer formats.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            write!(f, "N({})", self.precision)
        } else {
            write!(f, "N({},{})", self.precision, self.scale)
        }
    }
}

impl FromStr for ValidatorConfig {
    type Err = ConfigError;

    /// Parse `N(m)`, `N(m,k)` or `N(m.k)`.
    ///
    /// The notation carries no sign policy, so the result accepts negatives;
    /// chain [`ValidatorConfig::with_only_positive`] to change that.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix("N(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ConfigError::InvalidNotation)?;

        let (precision_str, scale_str) = match body.split_once([',', '.']) {
            Some((m, k)) => (m, Some(k)),
            None => (body, None),
        };

        let precision = parse_notation_number(precision_str)?;
        let scale = match scale_str {
            Some(k) => parse_notation_number(k)?,
            None => 0,
        };

        Self::new(precision, scale, false)
    }
}

fn parse_notation_number(s: &str) -> ConfigResult<i64> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidNotation);
    }
    s.parse().map_err(|_| ConfigError::InvalidNotation)
}

// ============================================================================
// Deserialization (validated)
// ============================================================================

/// Unchecked wire form; converted through [`ValidatorConfig::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawValidatorConfig {
    precision: i64,
    #[serde(default)]
    scale: i64,
    #[serde(default)]
    only_positive: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawValidatorConfig> for ValidatorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawValidatorConfig) -> Result<Self, Self::Error> {
        Self::new(raw.precision, raw.scale, raw.only_positive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = ValidatorConfig::new(17, 2, true).unwrap();

        assert_eq!(config.precision(), 17);
        assert_eq!(config.scale(), 2);
        assert!(config.only_positive());
    }

    #[test]
    fn test_valid_configurations() {
        assert!(ValidatorConfig::new(2, 1, true).is_ok());
        assert!(ValidatorConfig::new(100, 30, true).is_ok());
        assert!(ValidatorConfig::new(1, 0, true).is_ok());
    }

    #[test]
    fn test_non_positive_precision() {
        assert_eq!(
            ValidatorConfig::new(-1, 2, true),
            Err(ConfigError::NonPositivePrecision { precision: -1 })
        );
        assert_eq!(
            ValidatorConfig::new(0, 0, false),
            Err(ConfigError::NonPositivePrecision { precision: 0 })
        );
    }

    #[test]
    fn test_scale_out_of_range() {
        assert_eq!(
            ValidatorConfig::new(1, -1, true),
            Err(ConfigError::ScaleOutOfRange {
                precision: 1,
                scale: -1
            })
        );
        assert_eq!(
            ValidatorConfig::new(1, 2, true),
            Err(ConfigError::ScaleOutOfRange {
                precision: 1,
                scale: 2
            })
        );
        // scale == precision leaves no room for an integer digit
        assert!(ValidatorConfig::new(5, 5, false).is_err());
    }

    #[test]
    fn test_integer_defaults() {
        let config = ValidatorConfig::integer(5).unwrap();
        assert_eq!(config.scale(), 0);
        assert!(!config.only_positive());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ValidatorConfig::integer(5).unwrap().with_only_positive(true);
        assert!(config.only_positive());
        assert_eq!(config.precision(), 5);
    }

    #[test]
    fn test_display_notation() {
        assert_eq!(ValidatorConfig::new(17, 2, true).unwrap().to_string(), "N(17,2)");
        assert_eq!(ValidatorConfig::integer(10).unwrap().to_string(), "N(10)");
    }

    #[test]
    fn test_parse_notation() {
        let config: ValidatorConfig = "N(17,2)".parse().unwrap();
        assert_eq!(config, ValidatorConfig::new(17, 2, false).unwrap());

        let dotted: ValidatorConfig = " N(17.2) ".parse().unwrap();
        assert_eq!(dotted, config);

        let integer: ValidatorConfig = "N(8)".parse().unwrap();
        assert_eq!(integer, ValidatorConfig::integer(8).unwrap());
    }

    #[test]
    fn test_parse_notation_invalid() {
        for text in ["", "N", "N()", "N(a,b)", "N(-1)", "(17,2)", "N(17,2", "N(1,2,3)"] {
            assert_eq!(
                text.parse::<ValidatorConfig>(),
                Err(ConfigError::InvalidNotation),
                "{text:?}"
            );
        }

        // Well-formed notation still goes through the invariant checks
        assert_eq!(
            "N(0)".parse::<ValidatorConfig>(),
            Err(ConfigError::NonPositivePrecision { precision: 0 })
        );
        assert_eq!(
            "N(3,3)".parse::<ValidatorConfig>(),
            Err(ConfigError::ScaleOutOfRange {
                precision: 3,
                scale: 3
            })
        );
    }

    #[test]
    fn test_notation_roundtrip() {
        let config = ValidatorConfig::new(30, 15, false).unwrap();
        assert_eq!(config.to_string().parse::<ValidatorConfig>().unwrap(), config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"precision": 17, "scale": 2, "only_positive": true}"#)
                .unwrap();
        assert_eq!(config, ValidatorConfig::new(17, 2, true).unwrap());

        let defaults: ValidatorConfig = serde_json::from_str(r#"{"precision": 4}"#).unwrap();
        assert_eq!(defaults, ValidatorConfig::integer(4).unwrap());

        let invalid = serde_json::from_str::<ValidatorConfig>(r#"{"precision": 1, "scale": 2}"#);
        assert!(invalid.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let config = ValidatorConfig::new(17, 2, true).unwrap();
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"precision": 17, "scale": 2, "only_positive": true})
        );
    }
}
