//! Prices

use std::{fmt, ops::Deref};

use rusty_money::{
    Money, MoneyError,
    iso::{self, Currency},
};
use serde::Deserialize;
use thiserror::Error;

/// ISO 4217 lists IDR with two minor digits even though sen are no longer in use.
const MINOR_UNITS_PER_RUPIAH: i64 = 100;

/// Errors raised by price arithmetic.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// An amount exceeded the representable range.
    #[error("price arithmetic overflowed")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// The currency every storefront price is denominated in.
pub fn store_currency() -> &'static Currency {
    iso::IDR
}

/// Represents a price in whole rupiah.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// Creates a new Price
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.value.checked_mul(u64::from(quantity)).map(Price::new)
    }

    /// Convert into store-currency money.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the amount does not fit in minor units.
    pub fn to_money(self) -> Result<Money<'static, Currency>, PriceError> {
        let minor_units = i64::try_from(self.value)
            .ok()
            .and_then(|value| value.checked_mul(MINOR_UNITS_PER_RUPIAH))
            .ok_or(PriceError::Overflow)?;

        Ok(Money::from_minor(minor_units, store_currency()))
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rp {}", group_thousands(self.value))
    }
}

/// Format money the way the storefront shows prices, e.g. `Rp 30.000`.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    let minor_units = money.to_minor_units();
    let sign = if minor_units < 0 { "-" } else { "" };
    let rupiah = minor_units.unsigned_abs() / MINOR_UNITS_PER_RUPIAH.unsigned_abs();

    format!("{sign}Rp {}", group_thousands(rupiah))
}

/// Sum a sequence of money values, starting from zero in the store currency.
///
/// # Errors
///
/// Returns a [`PriceError::Money`] if any value is in a different currency.
pub fn sum_money(
    amounts: impl IntoIterator<Item = Money<'static, Currency>>,
) -> Result<Money<'static, Currency>, PriceError> {
    amounts
        .into_iter()
        .try_fold(Money::from_minor(0, store_currency()), |acc, amount| {
            acc.add(amount).map_err(PriceError::from)
        })
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }

        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(15_000);

        assert_eq!(price.value, 15_000);
    }

    #[test]
    fn price_derefs_to_u64() {
        let price = Price { value: 100 };

        assert_eq!(*price, 100);
    }

    #[test]
    fn price_displays_with_dot_grouping() {
        assert_eq!(Price::new(0).to_string(), "Rp 0");
        assert_eq!(Price::new(999).to_string(), "Rp 999");
        assert_eq!(Price::new(1_000).to_string(), "Rp 1.000");
        assert_eq!(Price::new(15_000).to_string(), "Rp 15.000");
        assert_eq!(Price::new(1_234_567).to_string(), "Rp 1.234.567");
    }

    #[test]
    fn checked_mul_detects_overflow() {
        assert_eq!(Price::new(15_000).checked_mul(2), Some(Price::new(30_000)));
        assert_eq!(Price::new(u64::MAX).checked_mul(2), None);
    }

    #[test]
    fn to_money_uses_store_currency() -> TestResult {
        let money = Price::new(15_000).to_money()?;

        assert_eq!(money.currency(), store_currency());
        assert_eq!(money.to_minor_units(), 1_500_000);

        Ok(())
    }

    #[test]
    fn to_money_rejects_amounts_beyond_minor_range() {
        let result = Price::new(u64::MAX).to_money();

        assert_eq!(result, Err(PriceError::Overflow));
    }

    #[test]
    fn format_money_drops_minor_digits() -> TestResult {
        let money = Price::new(30_000).to_money()?;

        assert_eq!(format_money(&money), "Rp 30.000");

        Ok(())
    }

    #[test]
    fn sum_money_of_nothing_is_zero() -> TestResult {
        let total = sum_money([])?;

        assert_eq!(format_money(&total), "Rp 0");

        Ok(())
    }

    #[test]
    fn sum_money_rejects_foreign_currency() {
        let result = sum_money([Money::from_minor(100, iso::USD)]);

        assert!(matches!(result, Err(PriceError::Money(_))));
    }
}
