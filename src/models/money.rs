//! Money type for representing ledger amounts
//!
//! Internally stores amounts in cents (i64) so that summary totals and
//! report buckets accumulate exactly, with no floating-point drift across
//! large imports. Decimal strings exist only at the parse/format boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendlite::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole currency-unit portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a decimal string
    ///
    /// Accepts formats: "10.50", "10.5", "10", "$10.50", "-10.50".
    /// Fractional digits beyond the second are rounded half-up on the cent
    /// boundary ("4.505" parses as 4.51).
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let raw = s.trim();

        let (negative, rest) = match raw.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, raw),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, frac) = match rest.split_once('.') {
            Some((w, f)) => (w, f),
            None => (rest, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        let mut digits = frac.bytes();
        let tenths = digits.next().map(|b| i64::from(b - b'0')).unwrap_or(0);
        let hundredths = digits.next().map(|b| i64::from(b - b'0')).unwrap_or(0);
        let round_up = digits.next().map(|b| b >= b'5').unwrap_or(false);

        let mut cents = dollars * 100 + tenths * 10 + hundredths;
        if round_up {
            cents += 1;
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format as a plain decimal string without a currency symbol
    ///
    /// This is the CSV interchange format: "3500.00", "180.45".
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
    }

    #[test]
    fn test_parse_rounds_half_up_on_cent_boundary() {
        assert_eq!(Money::parse("4.505").unwrap().cents(), 451);
        assert_eq!(Money::parse("4.504").unwrap().cents(), 450);
        assert_eq!(Money::parse("10.999").unwrap().cents(), 1100);
        assert_eq!(Money::parse("180.4550").unwrap().cents(), 18046);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.3.4").is_err());
        assert!(Money::parse("1,200").is_err());
        assert!(Money::parse("$").is_err());
    }

    #[test]
    fn test_to_decimal_string() {
        assert_eq!(Money::from_cents(350000).to_decimal_string(), "3500.00");
        assert_eq!(Money::from_cents(18045).to_decimal_string(), "180.45");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = Money::zero();
        c += a;
        assert_eq!(c.cents(), 1000);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
