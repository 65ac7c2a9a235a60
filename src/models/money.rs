//! Money type for representing currency amounts
//!
//! Internally stores amounts as an exact decimal so that yearly charges can be
//! spread over twelve months, and shared amounts divided between members,
//! without accumulating binary floating-point error. Rounding only happens
//! where a caller asks for it: whole units for the rounded split policy,
//! cents for display.
//!
//! Arithmetic never panics: sums and differences saturate at the bounds of
//! the decimal range.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Represents a monetary amount in the household currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wrap an exact decimal amount
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use foyer::models::Money;
    /// let rent = Money::from_major(950);
    /// assert_eq!(rent.to_string(), "950.00");
    /// ```
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use foyer::models::Money;
    /// let coffee = Money::from_cents(350);
    /// assert_eq!(coffee.to_string(), "3.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Check if the amount has no fractional part
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Divide the amount into `parts` equal pieces
    ///
    /// Zero parts yields zero rather than a division error.
    pub fn divide_by(&self, parts: usize) -> Self {
        if parts == 0 {
            return Self::zero();
        }
        Self(
            self.0
                .checked_div(Decimal::from(parts))
                .unwrap_or(Decimal::ZERO),
        )
    }

    /// The slice of this amount that `part` represents out of `whole`
    ///
    /// Multiplies before dividing so that exact ratios (2000 out of 3000 of
    /// 900) stay exact, falling back to ratio-first when the product is out
    /// of range. A zero `whole` yields zero.
    pub fn proportion(&self, part: Money, whole: Money) -> Self {
        if whole.is_zero() {
            return Self::zero();
        }
        let exact = self
            .0
            .checked_mul(part.0)
            .and_then(|product| product.checked_div(whole.0));
        let value = exact
            .or_else(|| {
                part.0
                    .checked_div(whole.0)
                    .map(|ratio| self.0.saturating_mul(ratio))
            })
            .unwrap_or(Decimal::ZERO);
        Self(value)
    }

    /// Take `percentage` percent of this amount
    pub fn percent(&self, percentage: Decimal) -> Self {
        let value = self
            .0
            .checked_mul(percentage)
            .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
            .unwrap_or_else(|| (self.0 / Decimal::ONE_HUNDRED).saturating_mul(percentage));
        Self(value)
    }

    /// Round half up to the nearest whole currency unit
    ///
    /// Ties go toward positive infinity: 2.5 becomes 3 and -2.5 becomes -2.
    pub fn round_half_up(&self) -> Self {
        Self(self.0.saturating_add(Decimal::new(5, 1)).floor())
    }

    /// Round to two decimal places for display
    pub fn round_to_cents(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Approximate value as a float, for percentages and charts
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1 200,00" is not
    /// accepted but "1 200.00" and "1_200" are.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim_start_matches(['$', '€', '£']);
        let digits: String = rest
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect();

        if digits.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str(&digits)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.round_to_cents();
        if rounded.is_negative() {
            format!("-{}{}", symbol, rounded.abs())
        } else {
            format!("{}{}", symbol, rounded)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents().0;
        if rounded.is_zero() {
            write!(f, "{:.2}", Decimal::ZERO)
        } else {
            write!(f, "{:.2}", rounded)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
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
    use rust_decimal_macros::dec;

    #[test]
    fn test_constructors() {
        assert_eq!(Money::from_cents(1050).amount(), dec!(10.50));
        assert_eq!(Money::from_major(12).amount(), dec!(12));
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::new(dec!(1000) / dec!(3)).to_string(), "333.33");
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_major(500).format_with_symbol("€"), "€500.00");
        assert_eq!(Money::from_cents(-250).format_with_symbol("$"), "-$2.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(1000);
        let b = Money::from_major(500);

        assert_eq!(a + b, Money::from_major(1500));
        assert_eq!(a - b, Money::from_major(500));
        assert_eq!(-a, Money::from_major(-1000));
    }

    #[test]
    fn test_arithmetic_saturates_at_the_decimal_bounds() {
        let max = Money::new(Decimal::MAX);
        let min = Money::new(Decimal::MIN);

        assert_eq!(max + max, max);
        assert_eq!(min - max, min);

        let mut total = max;
        total += Money::from_major(1);
        assert_eq!(total, max);
        total -= min;
        assert_eq!(total, max);

        let sum: Money = vec![max, max, Money::from_major(5)].into_iter().sum();
        assert_eq!(sum, max);
    }

    #[test]
    fn test_scaling_huge_amounts_does_not_overflow() {
        let huge = Money::new(dec!(60000000000000000000000000000));

        let half = huge.proportion(Money::from_major(1000), Money::from_major(2000));
        assert_eq!(half, Money::new(dec!(30000000000000000000000000000)));

        assert_eq!(
            huge.percent(dec!(50)),
            Money::new(dec!(30000000000000000000000000000))
        );
        assert_eq!(Money::new(Decimal::MAX).round_half_up(), Money::new(Decimal::MAX));
    }

    #[test]
    fn test_divide_by() {
        assert_eq!(Money::from_major(1000).divide_by(2), Money::from_major(500));
        assert_eq!(Money::from_major(1000).divide_by(0), Money::zero());

        let third = Money::from_major(100).divide_by(3);
        let total = third + third + third;
        assert!((total - Money::from_major(100)).abs().amount() < dec!(0.000001));
    }

    #[test]
    fn test_proportion_is_exact_when_possible() {
        let amount = Money::from_major(900);
        let share = amount.proportion(Money::from_major(2000), Money::from_major(3000));
        assert_eq!(share, Money::from_major(600));
        assert_eq!(amount.proportion(Money::from_major(10), Money::zero()), Money::zero());
    }

    #[test]
    fn test_percent() {
        assert_eq!(Money::from_major(100).percent(dec!(70)), Money::from_major(70));
        assert_eq!(Money::from_major(80).percent(dec!(12.5)), Money::from_major(10));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(Money::new(dec!(2.5)).round_half_up(), Money::from_major(3));
        assert_eq!(Money::new(dec!(2.49)).round_half_up(), Money::from_major(2));
        assert_eq!(Money::new(dec!(-2.5)).round_half_up(), Money::from_major(-2));
        assert_eq!(Money::new(dec!(-2.51)).round_half_up(), Money::from_major(-3));
        assert!(Money::new(dec!(333.3333)).round_half_up().is_whole());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("$10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("€10").unwrap(), Money::from_major(10));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("1 200.00").unwrap(), Money::from_major(1200));
        assert_eq!(Money::parse("1_200").unwrap(), Money::from_major(1200));
        assert!(Money::parse("").is_err());
        assert!(Money::parse("ten").is_err());
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::from_major(1).is_positive());
        assert!(Money::from_major(-1).is_negative());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_major(100),
            Money::from_major(200),
            Money::from_cents(350),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_cents(30350));
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_deserialize_numbers_and_strings() {
        let from_number: Money = serde_json::from_str("1000").unwrap();
        let from_float: Money = serde_json::from_str("12.5").unwrap();
        let from_string: Money = serde_json::from_str("\"99.99\"").unwrap();
        assert_eq!(from_number, Money::from_major(1000));
        assert_eq!(from_float, Money::from_cents(1250));
        assert_eq!(from_string, Money::from_cents(9999));
    }
}
