//! Fixed-point billing amount
//!
//! Mirrors a `DECIMAL(10, 2)` column: at most eight integer digits and
//! exactly two fractional digits, held as a whole number of hundredths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{HospitalError, Result};

/// Largest magnitude a `DECIMAL(10, 2)` column can hold, in hundredths
pub const MAX_CENTS: i64 = 9_999_999_999;

/// Monetary amount with two fractional digits
///
/// Serialises as its decimal string (`"200.00"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount {
    cents: i64,
}

impl Amount {
    /// Build an amount from a whole number of hundredths
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` when the value does not fit `DECIMAL(10, 2)`.
    pub fn from_cents(cents: i64) -> Result<Self> {
        if cents.unsigned_abs() > MAX_CENTS as u64 {
            return Err(HospitalError::InvalidAmount {
                input: cents.to_string(),
                reason: "exceeds DECIMAL(10, 2) range".to_string(),
            });
        }
        Ok(Self { cents })
    }

    /// Whole currency units; every `u16` fits the column
    pub const fn from_units(units: u16) -> Self {
        Self {
            cents: units as i64 * 100,
        }
    }

    /// Convert a value read back from a NUMERIC column
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for non-finite or out-of-range values.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(HospitalError::InvalidAmount {
                input: value.to_string(),
                reason: "not a finite number".to_string(),
            });
        }
        let scaled = (value * 100.0).round();
        if scaled.abs() > MAX_CENTS as f64 {
            return Err(HospitalError::InvalidAmount {
                input: value.to_string(),
                reason: "exceeds DECIMAL(10, 2) range".to_string(),
            });
        }
        Ok(Self {
            cents: scaled as i64,
        })
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Value bound into the store's NUMERIC column
    pub fn to_f64(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let magnitude = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

impl FromStr for Amount {
    type Err = HospitalError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| HospitalError::InvalidAmount {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected digits after the decimal point"));
        }
        if fraction.len() > 2 {
            return Err(invalid("more than 2 fractional digits"));
        }

        let whole = whole.trim_start_matches('0');
        if whole.len() > 8 {
            return Err(invalid("exceeds DECIMAL(10, 2) range"));
        }
        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| invalid("expected digits before the decimal point"))?
        };
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("bad fraction"))?,
        };

        let cents = whole * 100 + fraction;
        Amount::from_cents(if negative { -cents } else { cents })
    }
}

impl TryFrom<String> for Amount {
    type Error = HospitalError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}
