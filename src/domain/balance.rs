use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Monetary balance held by a session.
///
/// Wraps `rust_decimal::Decimal` so amounts never pass through binary floating point.
/// Always displayed with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `None` when the sum leaves the representable range.
    pub fn checked_add(self, amount: Decimal) -> Option<Self> {
        self.0.checked_add(amount).map(Self)
    }

    pub fn checked_sub(self, amount: Decimal) -> Option<Self> {
        self.0.checked_sub(amount).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Money(self.0))
    }
}

/// Displays an amount rounded half away from zero to two decimal places.
///
/// `Decimal`'s own precision formatting truncates, so amounts are rounded first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(pub Decimal);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{rounded:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balance_arithmetic() {
        let balance = Balance::new(dec!(10.0));
        assert_eq!(balance.checked_add(dec!(5.0)), Some(Balance::new(dec!(15.0))));
        assert_eq!(balance.checked_sub(dec!(5.0)), Some(Balance::new(dec!(5.0))));
    }

    #[test]
    fn test_balance_arithmetic_overflow() {
        assert_eq!(Balance::new(Decimal::MAX).checked_add(dec!(1)), None);
        assert_eq!(Balance::new(Decimal::MIN).checked_sub(dec!(1)), None);
    }

    #[test]
    fn test_balance_display_two_decimals() {
        assert_eq!(Balance::ZERO.to_string(), "0.00");
        assert_eq!(Balance::new(dec!(100)).to_string(), "100.00");
        assert_eq!(Balance::new(dec!(12.5)).to_string(), "12.50");
    }

    #[test]
    fn test_display_rounds_extra_places() {
        assert_eq!(Balance::new(dec!(10.999)).to_string(), "11.00");
        assert_eq!(Balance::new(dec!(1.005)).to_string(), "1.01");
        assert_eq!(Balance::new(dec!(0.005)).to_string(), "0.01");
        assert_eq!(Balance::new(dec!(2.004)).to_string(), "2.00");
        assert_eq!(Money(dec!(-1.005)).to_string(), "-1.01");
    }
}
