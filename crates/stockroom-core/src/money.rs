//! # Money Module
//!
//! Provides the `Money` type for unit prices and bill-of-materials totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Three parts at 0.10 each, product priced at 0.30:                      │
//! │    0.1 + 0.1 + 0.1 = 0.30000000000000004 > 0.30  ❌ rejected!           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 + 10 + 10 = 30 <= 30  ✅ the cost check is exact                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price: Money = "10.99".parse().unwrap();
//! assert_eq!(price.cents(), 1099);
//!
//! let total = price.checked_add(Money::from_cents(500)).unwrap();
//! assert_eq!(total.to_string(), "$15.99");
//!
//! // Totals never wrap: a sum past the limit stays at the limit
//! let huge: Money = [Money::MAX, Money::from_cents(1)].iter().sum();
//! assert_eq!(huge, Money::MAX);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use crate::error::MoneyParseError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative prices must be representable so validation
///   can reject them with a proper message
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serializes as the bare cent count**
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// The largest representable amount.
    pub const MAX: Money = Money(i64::MAX);

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, or `None` when the total leaves the i64 range.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, clamping at `Money::MAX` (or the negative limit).
    #[inline]
    pub const fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Formats the amount with a caller-chosen currency symbol.
    ///
    /// `Display` uses `$`; the shell passes its configured symbol here.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"10"`, `"10.5"` or `"-3.25"` into cents.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - An optional leading `-`
/// - At most two digits after the decimal point
/// - No thousands separators, no currency symbols
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (major, minor) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (major.is_empty() && minor.is_empty()) || !all_digits(major) || !all_digits(minor) {
            return Err(MoneyParseError::InvalidFormat(text.to_string()));
        }
        if minor.len() > 2 {
            return Err(MoneyParseError::TooManyDecimals(text.to_string()));
        }

        let overflow = || MoneyParseError::Overflow(text.to_string());
        let major_value: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| overflow())?
        };
        // "5" after the point means 50 cents
        let minor_value: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => minor.parse().map_err(|_| overflow())?,
        };

        let cents = major_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor_value))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Summing a bill of materials. Saturates instead of wrapping; use
/// `checked_add` where an overflow has to be detected.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(Money::from_cents(1234).format_with_symbol("€"), "€12.34");
    }

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!("10.99".parse::<Money>().unwrap().cents(), 1099);
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!(" 0.05 ".parse::<Money>().unwrap().cents(), 5);
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!("3.".parse::<Money>().unwrap().cents(), 300);
        assert_eq!("-3.25".parse::<Money>().unwrap().cents(), -325);
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        assert_eq!("".parse::<Money>(), Err(MoneyParseError::Empty));
        assert_eq!("   ".parse::<Money>(), Err(MoneyParseError::Empty));
        assert!(matches!(
            "abc".parse::<Money>(),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1,000".parse::<Money>(),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            ".".parse::<Money>(),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "-".parse::<Money>(),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1.999".parse::<Money>(),
            Err(MoneyParseError::TooManyDecimals(_))
        ));
        assert!(matches!(
            "99999999999999999999".parse::<Money>(),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(Money::MAX.checked_add(Money::zero()), Some(Money::MAX));
        assert_eq!(Money::MAX.checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::MAX.checked_add(Money::MAX), None);
    }

    #[test]
    fn test_saturating_add() {
        let a = Money::from_cents(1000);
        assert_eq!(a.saturating_add(a), Money::from_cents(2000));
        assert_eq!(Money::MAX.saturating_add(a), Money::MAX);
        assert_eq!(
            Money::from_cents(i64::MIN).saturating_add(Money::from_cents(-1)),
            Money::from_cents(i64::MIN)
        );
    }

    #[test]
    fn test_sum_saturates_at_max() {
        let parts = [Money::MAX, Money::MAX, Money::from_cents(1)];
        let total: Money = parts.iter().sum();
        assert_eq!(total, Money::MAX);

        // The largest price that parses is still a valid summand
        let largest: Money = "92233720368547758.07".parse().unwrap();
        assert_eq!(largest, Money::MAX);
        let twice: Money = [largest, largest].into_iter().sum();
        assert_eq!(twice, Money::MAX);
    }

    /// Three dimes must cover a thirty-cent product exactly.
    #[test]
    fn test_sum_is_exact() {
        let dimes = [Money::from_cents(10); 3];
        let total: Money = dimes.iter().sum();
        assert_eq!(total, Money::from_cents(30));
        assert!(total <= Money::from_cents(30));

        let owned: Money = dimes.into_iter().sum();
        assert_eq!(owned, total);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_cents(-1).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
