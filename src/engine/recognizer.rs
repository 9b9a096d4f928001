// ============================================================================
// Number Recognizer
// Deterministic scanner for [+-]?digit+((.|,)digit+)?
// ============================================================================

use crate::domain::{ParsedNumber, Sign};

/// Recognize `text` as a decimal number.
///
/// Grammar, matched against the whole input:
///
/// ```text
/// number    = [sign] digits [separator digits]
/// sign      = "+" | "-"
/// separator = "." | ","
/// digits    = 1*( "0" .. "9" )
/// ```
///
/// Only ASCII digits are accepted. Any leftover character (whitespace,
/// a trailing newline, a second separator or sign) fails the match.
///
/// # Examples
/// - "0" -> integer "0", no fraction
/// - "-1,25" -> sign `-`, integer "1", fraction "25"
/// - "1." / ".5" / "1.0.0" -> `None`
pub fn recognize(text: &str) -> Option<ParsedNumber<'_>> {
    let first = *text.as_bytes().first()?;

    // Sign and separator are single ASCII bytes, so every split below lands
    // on a char boundary.
    let sign = Sign::from_byte(first);
    let unsigned = if sign.is_some() { &text[1..] } else { text };

    let int_len = leading_digits(unsigned);
    if int_len == 0 {
        return None;
    }
    let (integer_digits, rest) = unsigned.split_at(int_len);

    let fractional_digits = match rest.as_bytes().first() {
        None => "",
        Some(b'.' | b',') => {
            let fraction = &rest[1..];
            if fraction.is_empty() || leading_digits(fraction) != fraction.len() {
                return None;
            }
            fraction
        }
        Some(_) => return None,
    };

    Some(ParsedNumber {
        sign,
        integer_digits,
        fractional_digits,
    })
}

/// Length in bytes of the ASCII digit run at the start of `s`
#[inline]
fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
