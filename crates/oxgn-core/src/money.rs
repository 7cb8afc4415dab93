//! [`Money`], a USD amount held as whole cents.
//!
//! Amounts travel over JSON as decimal dollars (`8.99`) but are never summed
//! or multiplied as floats. Arithmetic saturates at `u64::MAX` cents instead
//! of overflowing.

use std::{
  fmt,
  iter::Sum,
  ops::{Add, AddAssign},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Error, Result};

/// A non-negative USD amount in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
  pub const ZERO: Money = Money(0);

  /// The largest amount accepted from decimal dollars: $10 trillion, well
  /// inside the range where `f64` holds every cent exactly.
  pub const MAX_ACCEPTED: Money = Money(1_000_000_000_000_000);

  pub const fn from_cents(cents: u64) -> Self { Self(cents) }

  /// Convert a decimal dollar amount, rounding to the nearest cent.
  /// Negative, non-finite and above-[`Money::MAX_ACCEPTED`] amounts are
  /// refused.
  pub fn from_dollars(dollars: f64) -> Result<Self> {
    let cents = (dollars * 100.0).round();
    if !cents.is_finite() || cents < 0.0 || cents > Self::MAX_ACCEPTED.0 as f64 {
      return Err(Error::InvalidAmount(dollars.to_string()));
    }
    Ok(Self(cents as u64))
  }

  pub const fn cents(self) -> u64 { self.0 }

  pub fn as_dollars(self) -> f64 { self.0 as f64 / 100.0 }

  pub fn is_zero(self) -> bool { self.0 == 0 }

  /// `basis_points / 10_000` of this amount, rounded half-up to the cent.
  pub fn percent(self, basis_points: u64) -> Self {
    let scaled = (u128::from(self.0) * u128::from(basis_points) + 5_000) / 10_000;
    Self(u64::try_from(scaled).unwrap_or(u64::MAX))
  }

  pub fn times(self, count: u64) -> Self { Self(self.0.saturating_mul(count)) }
}

impl Add for Money {
  type Output = Money;

  fn add(self, rhs: Money) -> Money { Money(self.0.saturating_add(rhs.0)) }
}

impl AddAssign for Money {
  fn add_assign(&mut self, rhs: Money) { *self = *self + rhs; }
}

impl Sum for Money {
  fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
    iter.fold(Money::ZERO, Add::add)
  }
}

impl<'a> Sum<&'a Money> for Money {
  fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
    iter.copied().sum()
  }
}

/// en-US currency rendering: `$8.99`, `$1,234.50`.
impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let dollars = (self.0 / 100).to_string();
    let cents = self.0 % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
      if i > 0 && (dollars.len() - i) % 3 == 0 {
        grouped.push(',');
      }
      grouped.push(ch);
    }

    write!(f, "${grouped}.{cents:02}")
  }
}

impl Serialize for Money {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(self.as_dollars())
  }
}

impl<'de> Deserialize<'de> for Money {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let dollars = f64::deserialize(deserializer)?;
    Money::from_dollars(dollars).map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn displays_like_en_us_currency() {
    assert_eq!(Money::from_cents(899).to_string(), "$8.99");
    assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    assert_eq!(Money::from_cents(123_450).to_string(), "$1,234.50");
    assert_eq!(Money::from_cents(100_000_000).to_string(), "$1,000,000.00");
    assert_eq!(Money::ZERO.to_string(), "$0.00");
  }

  #[test]
  fn from_dollars_rounds_to_cent() {
    assert_eq!(Money::from_dollars(8.99).unwrap().cents(), 899);
    assert_eq!(Money::from_dollars(26.97).unwrap().cents(), 2697);
    assert!(Money::from_dollars(-1.0).is_err());
    assert!(Money::from_dollars(f64::NAN).is_err());
  }

  #[test]
  fn percent_rounds_half_up() {
    // 8% of $8.99 is $0.7192.
    assert_eq!(Money::from_cents(899).percent(800).cents(), 72);
    assert_eq!(Money::from_cents(25).percent(800).cents(), 2);
    // Exact tie: half a cent rounds up.
    assert_eq!(Money::from_cents(1).percent(5_000).cents(), 1);
  }

  #[test]
  fn sums_without_float_drift() {
    let total: Money = [899, 899, 899].into_iter().map(Money::from_cents).sum();
    assert_eq!(total.to_string(), "$26.97");
  }

  #[test]
  fn serde_uses_decimal_dollars() {
    let json = serde_json::to_string(&Money::from_cents(899)).unwrap();
    assert_eq!(json, "8.99");
    let back: Money = serde_json::from_str("8.99").unwrap();
    assert_eq!(back.cents(), 899);
    assert!(serde_json::from_str::<Money>("-2.0").is_err());
  }

  #[test]
  fn oversized_amounts_are_refused() {
    assert!(matches!(Money::from_dollars(1e18), Err(Error::InvalidAmount(_))));
    assert!(serde_json::from_str::<Money>("1e18").is_err());
    assert_eq!(
      Money::from_dollars(10_000_000_000_000.0).unwrap(),
      Money::MAX_ACCEPTED
    );
  }

  #[test]
  fn arithmetic_saturates_instead_of_overflowing() {
    let max = Money::from_cents(u64::MAX);
    assert_eq!(max.percent(800), Money::from_cents(1_475_739_525_896_764_129));
    assert_eq!(max.percent(20_000), max);
    assert_eq!(max.times(3), max);
    assert_eq!(max + Money::from_cents(1), max);

    let mut total = max;
    total += Money::from_cents(899);
    assert_eq!(total, max);
    assert_eq!([max, max].iter().sum::<Money>(), max);
  }
}
