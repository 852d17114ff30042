//! Money type for representing rupee amounts.
//!
//! Uses paise-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront
//! sells in INR only, so no currency field is carried.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary value in Indian rupees.
///
/// The amount is stored in paise (1/100 rupee). Cart arithmetic
/// saturates instead of overflowing so the read side never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in paise.
    pub paise: i64,
}

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money { paise: 0 };

    /// Create a Money value from paise.
    pub fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    /// Create a Money value from a decimal rupee amount.
    ///
    /// ```
    /// use essancia_commerce::money::Money;
    /// let price = Money::from_rupees(1299.0);
    /// assert_eq!(price.paise, 129900);
    /// ```
    pub fn from_rupees(rupees: f64) -> Self {
        Self {
            paise: (rupees * 100.0).round() as i64,
        }
    }

    /// Normalize a textual price into a Money value.
    ///
    /// Strips every character that is not an ASCII digit, `.` or `-`,
    /// then parses the remainder: `"₹1,299.00"` becomes 1299.00.
    /// Unparsable text normalizes to zero so the cart read path stays
    /// infallible; use [`Money::try_parse`] where a hard failure is
    /// wanted.
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or(Money::ZERO)
    }

    /// Strict variant of [`Money::parse`].
    pub fn try_parse(text: &str) -> Result<Self, CommerceError> {
        let numeric: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        numeric
            .parse::<f64>()
            .map(Money::from_rupees)
            .map_err(|_| CommerceError::UnparsablePrice(text.to_string()))
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.paise == 0
    }

    /// Convert to a decimal rupee value.
    pub fn to_rupees(&self) -> f64 {
        self.paise as f64 / 100.0
    }

    /// Add another amount, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::from_paise(self.paise.saturating_add(other.paise))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::from_paise(self.paise.saturating_mul(quantity as i64))
    }

    /// Format as a display string (e.g., "₹1299.00").
    pub fn display(&self) -> String {
        format!("\u{20b9}{:.2}", self.to_rupees())
    }

    /// Format without the currency symbol (e.g., "1299.00").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_rupees())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_paise() {
        let m = Money::from_paise(129900);
        assert_eq!(m.paise, 129900);
    }

    #[test]
    fn test_money_from_rupees() {
        let m = Money::from_rupees(1299.0);
        assert_eq!(m.paise, 129900);

        let m = Money::from_rupees(49.99);
        assert_eq!(m.paise, 4999);
    }

    #[test]
    fn test_money_to_rupees() {
        let m = Money::from_paise(4999);
        assert!((m.to_rupees() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::from_paise(129900);
        assert_eq!(m.display(), "\u{20b9}1299.00");
        assert_eq!(m.display_amount(), "1299.00");
    }

    #[test]
    fn test_parse_formatted_text() {
        let m = Money::parse("\u{20b9}1,299.00");
        assert_eq!(m.paise, 129900);
    }

    #[test]
    fn test_parse_plain_number() {
        let m = Money::parse("999");
        assert_eq!(m.paise, 99900);
    }

    #[test]
    fn test_parse_negative() {
        let m = Money::parse("-50.00");
        assert_eq!(m.paise, -5000);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(Money::parse("free!"), Money::ZERO);
        assert_eq!(Money::parse(""), Money::ZERO);
    }

    #[test]
    fn test_try_parse_garbage_is_error() {
        assert!(Money::try_parse("free!").is_err());
        assert!(Money::try_parse("\u{20b9}2,499.00").is_ok());
    }

    #[test]
    fn test_saturating_add() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);
        assert_eq!(a.saturating_add(b).paise, 1500);

        let max = Money::from_paise(i64::MAX);
        assert_eq!(max.saturating_add(b).paise, i64::MAX);
    }

    #[test]
    fn test_saturating_mul() {
        let m = Money::from_paise(129900);
        assert_eq!(m.saturating_mul(2).paise, 259800);
        assert_eq!(m.saturating_mul(0).paise, 0);
    }
}
