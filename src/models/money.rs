//! Money type for submitted amounts
//!
//! Drafts are entered as decimal strings. On submission they are converted to
//! integer minor units by `round(amount * 100)`, for every currency alike.
//! The decimal is scaled exactly from its digits, so "12.345" lands on the
//! half and rounds up to 1235 instead of drifting below it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Minor units per major unit. No per-currency exponent table is applied.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// A monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use iou_wizard::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.major(), 10);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole major-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_UNITS_PER_MAJOR
    }

    /// Get the minor portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_UNITS_PER_MAJOR).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Convert a decimal draft string to minor units.
    ///
    /// Accepts "12", "12.3", "12.345", ".5", "-4.20" and an optional leading
    /// currency symbol. Rounds half toward positive infinity, so "-0.005"
    /// becomes 0 and "0.005" becomes 1.
    ///
    /// # Examples
    /// ```
    /// use iou_wizard::models::Money;
    /// assert_eq!(Money::from_draft("12.345").unwrap().minor(), 1235);
    /// ```
    pub fn from_draft(draft: &str) -> Result<Self, MoneyParseError> {
        let trimmed = draft.trim();
        let invalid = || MoneyParseError::InvalidFormat(draft.to_string());

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let unsigned = unsigned
            .strip_prefix(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(unsigned);

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::Overflow(draft.to_string()))?
        };

        let mut digits = fraction.chars().map(|c| i64::from(c as u8 - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let rest: Vec<i64> = digits.collect();

        let magnitude = whole
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .and_then(|m| m.checked_add(tenths * 10 + hundredths))
            .ok_or_else(|| MoneyParseError::Overflow(draft.to_string()))?;

        // Compare the remainder past the hundredths digit against one half.
        let remainder = match rest.first() {
            None => Remainder::Zero,
            Some(&d) if d > 5 => Remainder::AboveHalf,
            Some(&d) if d < 5 => {
                if d == 0 && rest.iter().all(|&x| x == 0) {
                    Remainder::Zero
                } else {
                    Remainder::BelowHalf
                }
            }
            Some(_) => {
                if rest[1..].iter().any(|&x| x != 0) {
                    Remainder::AboveHalf
                } else {
                    Remainder::Half
                }
            }
        };

        let minor = if negative {
            match remainder {
                Remainder::AboveHalf => -(magnitude + 1),
                _ => -magnitude,
            }
        } else {
            match remainder {
                Remainder::Half | Remainder::AboveHalf => magnitude + 1,
                _ => magnitude,
            }
        };

        Ok(Self(minor))
    }

    /// Format with a symbol, e.g. "$12.35" or "-€3.00"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.major().abs(), self.minor_part())
        } else {
            format!("{}{}.{:02}", symbol, self.major(), self.minor_part())
        }
    }

    /// Format for a currency code, falling back to the code itself as prefix
    pub fn format_for_currency(&self, currency_code: &str) -> String {
        match currency_symbol(currency_code) {
            Some(symbol) => self.format_with_symbol(symbol),
            None => self.format_with_symbol(&format!("{} ", currency_code)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Remainder {
    Zero,
    BelowHalf,
    Half,
    AboveHalf,
}

/// Symbol for the handful of currencies the hosts display natively
pub fn currency_symbol(currency_code: &str) -> Option<&'static str> {
    match currency_code.to_ascii_uppercase().as_str() {
        "USD" | "CAD" | "AUD" | "NZD" | "MXN" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" | "CNY" => Some("¥"),
        "INR" => Some("₹"),
        "BRL" => Some("R$"),
        _ => None,
    }
}

/// Check that a draft is a plain non-negative decimal the amount step accepts
pub fn is_valid_amount_draft(draft: &str) -> bool {
    let draft = draft.trim();
    if draft.is_empty() || draft.starts_with('-') {
        return false;
    }
    Money::from_draft(draft).map(|m| !m.is_zero()).unwrap_or(false)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major().abs(), self.minor_part())
        } else {
            write!(f, "{}.{:02}", self.major(), self.minor_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Error type for draft amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Overflow(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            MoneyParseError::Overflow(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(Money::from_draft("12.345").unwrap().minor(), 1235);
        assert_eq!(Money::from_draft("0.005").unwrap().minor(), 1);
        assert_eq!(Money::from_draft("1.004").unwrap().minor(), 100);
        assert_eq!(Money::from_draft("1.0051").unwrap().minor(), 101);
    }

    #[test]
    fn test_negative_half_rounds_toward_positive() {
        assert_eq!(Money::from_draft("-12.345").unwrap().minor(), -1234);
        assert_eq!(Money::from_draft("-12.346").unwrap().minor(), -1235);
        assert_eq!(Money::from_draft("-12.3450001").unwrap().minor(), -1235);
    }

    #[test]
    fn test_plain_forms() {
        assert_eq!(Money::from_draft("10").unwrap().minor(), 1000);
        assert_eq!(Money::from_draft("10.5").unwrap().minor(), 1050);
        assert_eq!(Money::from_draft(".5").unwrap().minor(), 50);
        assert_eq!(Money::from_draft("7.").unwrap().minor(), 700);
        assert_eq!(Money::from_draft("$10.50").unwrap().minor(), 1050);
        assert_eq!(Money::from_draft(" 3.10 ").unwrap().minor(), 310);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Money::from_draft("").is_err());
        assert!(Money::from_draft(".").is_err());
        assert!(Money::from_draft("1.2.3").is_err());
        assert!(Money::from_draft("abc").is_err());
        assert!(matches!(
            Money::from_draft("99999999999999999999"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_amount_draft_validation() {
        assert!(is_valid_amount_draft("12.34"));
        assert!(!is_valid_amount_draft("0"));
        assert!(!is_valid_amount_draft("-5"));
        assert!(!is_valid_amount_draft(""));
    }

    #[test]
    fn test_formatting() {
        let m = Money::from_minor(1235);
        assert_eq!(m.to_string(), "12.35");
        assert_eq!(m.format_for_currency("USD"), "$12.35");
        assert_eq!(m.format_for_currency("eur"), "€12.35");
        assert_eq!(m.format_for_currency("CHF"), "CHF 12.35");
        assert_eq!(Money::from_minor(-5).format_with_symbol("$"), "-$0.05");
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
    }
}
