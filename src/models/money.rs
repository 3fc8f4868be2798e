//! Money in integer minor units
//!
//! Every amount in a group is a whole number of cents. Conversions to and
//! from decimal major units happen only at the edges: user input, the JSON
//! record format, and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A signed amount of cents
///
/// Positive balances mean a member is owed money, negative ones mean they owe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

/// Why a decimal amount could not become `Money`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    #[error("Amount is not a finite number")]
    NotFinite,

    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}

impl Money {
    /// Largest magnitude accepted from user input or expense records
    ///
    /// Ten trillion in major units.
    pub const MAX_INPUT: Money = Money(1_000_000_000_000_000);

    /// An amount of cents
    ///
    /// # Examples
    /// ```
    /// use groupsplit::models::Money;
    /// assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// `self + rhs`, or `None` outside the symmetric range `±i64::MAX`
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0
            .checked_add(rhs.0)
            .filter(|cents| *cents != i64::MIN)
            .map(Self)
    }

    /// `self - rhs`, or `None` outside the symmetric range `±i64::MAX`
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0
            .checked_sub(rhs.0)
            .filter(|cents| *cents != i64::MIN)
            .map(Self)
    }

    fn bounded(cents: i64, input: impl fmt::Display) -> Result<Self, MoneyParseError> {
        if cents.unsigned_abs() > Self::MAX_INPUT.0.unsigned_abs() {
            return Err(MoneyParseError::OutOfRange(input.to_string()));
        }
        Ok(Self(cents))
    }

    /// Convert a major-unit decimal (e.g. `12.34` dollars) into minor units
    ///
    /// Rounds half away from zero to the nearest cent. Non-finite values and
    /// magnitudes above [`Money::MAX_INPUT`] are rejected.
    ///
    /// # Examples
    /// ```
    /// use groupsplit::models::Money;
    /// assert_eq!(Money::from_major(12.34).unwrap().cents(), 1234);
    /// ```
    pub fn from_major(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite);
        }

        // `as` saturates, so huge values land on i64::MAX/MIN and fail the bound
        Self::bounded((value * 100.0).round() as i64, value)
    }

    /// The amount in major units, for the JSON record format
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse user input such as `42`, `42.5`, `-3.75` or `$12.00`
    ///
    /// At most two decimal places are accepted; fractions of a cent are an
    /// error rather than being rounded away. Magnitudes above
    /// [`Money::MAX_INPUT`] are out of range.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());
        let overflow = || MoneyParseError::OutOfRange(input.to_string());

        let s = input.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || !all_digits(whole)
            || !all_digits(fraction)
            || fraction.len() > 2
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(overflow)?;

        Self::bounded(if negative { -cents } else { cents }, input)
    }

    /// Render as `symbol` + major units, e.g. `€3.50` or `-$0.07`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Saturates at `±i64::MAX` instead of overflowing
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let total: i128 = iter.map(|m| i128::from(m.0)).sum();
        Self(total.clamp(-i128::from(i64::MAX), i128::from(i64::MAX)) as i64)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
