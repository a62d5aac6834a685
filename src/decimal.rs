use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// cents scale for finalized amounts
const MONEY_SCALE: u32 = 2;

/// half-up rounding (away from zero at the midpoint)
pub(crate) fn round_half_up(d: Decimal, dp: u32) -> Decimal {
    d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// finalized monetary amount with 2 decimal places, rounded half-up
///
/// every monetary value passes through this type exactly once when finalized;
/// intermediate arithmetic stays on raw `Decimal` and rounds here, never ad hoc
/// at call sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// finalize a raw decimal into cents
    pub fn from_decimal(d: Decimal) -> Self {
        Money(round_half_up(d, MONEY_SCALE))
    }

    /// create from whole currency units
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(round_half_up(Decimal::from_str(s)?, MONEY_SCALE)))
    }

    /// get underlying decimal for intermediate math
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money::from_decimal(self.0 * other)
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money::from_decimal(self.0 / other)
    }
}

/// nominal annual interest rate, carried as a percentage (6.5 means 6.5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from a percentage value (e.g. 6.5 for 6.5%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p)
    }

    /// get as percentage
    pub fn as_percent(&self) -> Decimal {
        self.0
    }

    /// get as a fraction (6.5% -> 0.065)
    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// periodic rate for the given number of payments per year
    pub fn periodic(&self, payments_per_year: u32) -> Decimal {
        self.as_fraction() / Decimal::from(payments_per_year)
    }

    /// subtract percentage points (buydown discounts)
    pub fn less_points(&self, points: Decimal) -> Rate {
        Rate(self.0 - points)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_percent(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_up_rounding() {
        // banker's rounding would give 2.34 here
        assert_eq!(Money::from_decimal(dec!(2.345)).as_decimal(), dec!(2.35));
        assert_eq!(Money::from_decimal(dec!(2.344)).as_decimal(), dec!(2.34));
        assert_eq!(Money::from_decimal(dec!(2.335)).as_decimal(), dec!(2.34));
        assert_eq!(Money::from_decimal(dec!(-2.345)).as_decimal(), dec!(-2.35));
    }

    #[test]
    fn test_money_finalizes_to_cents() {
        let m = Money::from_str_exact("2166.666666").unwrap();
        assert_eq!(m.to_string(), "2166.67");
    }

    #[test]
    fn test_multiply_rounds_once() {
        // balance x periodic rate, the per-period interest step
        let balance = Money::from_major(400_000);
        let periodic = Rate::from_percent(dec!(6.5)).periodic(12);
        let interest = balance * periodic;
        assert_eq!(interest.as_decimal(), dec!(2166.67));
    }

    #[test]
    fn test_rate_periodic() {
        let rate = Rate::from_percent(dec!(6.5));
        assert_eq!(rate.as_fraction(), dec!(0.065));
        assert_eq!(rate.periodic(12), dec!(0.065) / dec!(12));
    }

    #[test]
    fn test_rate_less_points() {
        let rate = Rate::from_percent(dec!(6.5));
        assert_eq!(rate.less_points(dec!(2)), Rate::from_percent(dec!(4.5)));
        assert_eq!(rate.less_points(dec!(0)), rate);
    }
}
