// ============================================================================
// Parsed Number
// Structural view of a recognized decimal number
// ============================================================================

use std::fmt;

/// Explicit sign in front of a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Map a sign character, if it is one
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Sign::Plus),
            b'-' => Some(Sign::Minus),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// A number split into its sign, integer digits and fractional digits.
///
/// Borrows from the validated text; only produced by a successful
/// [`recognize`](crate::engine::recognize), so `integer_digits` is never
/// empty and both digit runs contain ASCII `0-9` only. A missing fractional
/// part is represented as an empty `fractional_digits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedNumber<'a> {
    pub sign: Option<Sign>,
    pub integer_digits: &'a str,
    pub fractional_digits: &'a str,
}

impl ParsedNumber<'_> {
    /// 1 when an explicit sign is present, otherwise 0
    #[inline]
    pub fn sign_len(&self) -> usize {
        usize::from(self.sign.is_some())
    }

    #[inline]
    pub fn integer_len(&self) -> usize {
        self.integer_digits.len()
    }

    #[inline]
    pub fn fraction_len(&self) -> usize {
        self.fractional_digits.len()
    }

    /// Significant characters counted against precision: sign, integer and
    /// fractional digits. The separator does not count.
    #[inline]
    pub fn total_len(&self) -> usize {
        self.sign_len() + self.integer_len() + self.fraction_len()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Some(Sign::Minus)
    }
}

impl fmt::Display for ParsedNumber<'_> {
    /// Canonical form: sign as written, `.` as separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sign) = self.sign {
            write!(f, "{}", sign.as_char())?;
        }
        f.write_str(self.integer_digits)?;
        if !self.fractional_digits.is_empty() {
            write!(f, ".{}", self.fractional_digits)?;
        }
        Ok(())
    }
}
