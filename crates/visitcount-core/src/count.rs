//! Store-number coercion.
//!
//! Key-value stores hand numbers back as arbitrary-precision decimals. The
//! boundary keeps them as decimal text and converts to `u64` only when the
//! response is built. Fractional digits are truncated toward zero; negative,
//! malformed, or out-of-range values are rejected.

use std::fmt;

use crate::error::{Result, VisitCountError};

/// A number as returned by the store, in decimal text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreNumber(String);

impl StoreNumber {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to a visit count.
    pub fn to_count(&self) -> Result<u64> {
        let text = self.0.trim();
        let invalid = || VisitCountError::Unexpected(format!("invalid visit_count value: {:?}", self.0));

        let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
            Some(idx) => {
                let exp: i32 = text[idx + 1..].parse().map_err(|_| invalid())?;
                (&text[..idx], exp)
            }
            None => (text, 0),
        };

        let mantissa = mantissa.strip_prefix('+').unwrap_or(mantissa);
        if mantissa.starts_with('-') {
            return Err(VisitCountError::Unexpected(format!(
                "visit_count must not be negative: {}",
                self.0
            )));
        }

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (mantissa, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        // shift the decimal point by the exponent, then drop what stays fractional
        let digits = format!("{int_part}{frac_part}");
        if digits.bytes().all(|b| b == b'0') {
            return Ok(0);
        }
        let point = int_part.len() as i64 + exponent as i64;
        let whole: String = if point <= 0 {
            String::new()
        } else if point as usize >= digits.len() {
            let zeros = point as usize - digits.len();
            if zeros > 20 {
                return Err(out_of_range(&self.0));
            }
            format!("{digits}{}", "0".repeat(zeros))
        } else {
            digits[..point as usize].to_string()
        };

        let whole = whole.trim_start_matches('0');
        if whole.is_empty() {
            return Ok(0);
        }
        whole.parse::<u64>().map_err(|_| out_of_range(&self.0))
    }
}

fn out_of_range(text: &str) -> VisitCountError {
    VisitCountError::Unexpected(format!("visit_count does not fit in u64: {text}"))
}

impl From<u64> for StoreNumber {
    fn from(v: u64) -> Self {
        Self(v.to_string())
    }
}

impl From<i64> for StoreNumber {
    fn from(v: i64) -> Self {
        Self(v.to_string())
    }
}

impl fmt::Display for StoreNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
