//! Monetary amount tied to a currency.

use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use super::Currency;
use crate::error::{MoneyError, MoneyResult};

/// An amount of money in a specific currency.
///
/// Money is a value: every arithmetic operation returns a new instance and
/// leaves its operands untouched. Adding or subtracting amounts requires both
/// sides to carry the same currency; scaling by a number never does.
///
/// The currency's `digits` only affect display. The stored amount keeps full
/// precision until [`Money::round`] is called.
///
/// # Example
///
/// ```rust
/// use coinpurse_core::types::{Currency, Money};
/// use rust_decimal_macros::dec;
///
/// let a = Money::new(dec!(10), Currency::usd());
/// let b = Money::new(dec!(5), Currency::usd());
///
/// let total = a.add(&b).unwrap();
/// assert_eq!(total, Money::new(dec!(15), Currency::usd()));
/// assert_eq!(total.to_string(), "$15.00");
///
/// let euros = Money::new(dec!(5), Currency::eur());
/// assert!(a.add(&euros).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new amount. No validation is applied.
    #[must_use]
    pub fn new(amount: impl Into<Decimal>, currency: Currency) -> Self {
        Self {
            amount: amount.into(),
            currency,
        }
    }

    /// Creates an amount from a binary float.
    ///
    /// The float is converted to the decimal closest to its shortest form,
    /// not to its full binary expansion.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Unrepresentable`] for NaN, infinities and values
    /// outside the decimal range.
    pub fn try_from_f64(amount: f64, currency: Currency) -> MoneyResult<Self> {
        let amount = to_decimal(amount, "try_from_f64")?;
        Ok(Self::new(amount, currency))
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if both amounts carry the same currency.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns the absolute amount in the same currency.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_amount(self.amount.abs())
    }

    /// Rounds the stored amount to the currency's digits, half away from zero.
    #[must_use]
    pub fn round(&self) -> Self {
        self.with_amount(self.rounded_amount())
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ and
    /// [`MoneyError::Overflow`] if the sum is out of range.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other, "add")?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow { operation: "add" })
    }

    /// Subtracts an amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ and
    /// [`MoneyError::Overflow`] if the difference is out of range.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other, "sub")?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow { operation: "sub" })
    }

    /// Multiplies the amount by a scalar, keeping the currency.
    ///
    /// Any number convertible into a [`Decimal`] is accepted: integers,
    /// decimals and floats.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Unrepresentable`] if the scalar has no decimal
    /// value (NaN, infinite) and [`MoneyError::Overflow`] if the product is
    /// out of range.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, multiplier: impl TryInto<Decimal>) -> MoneyResult<Self> {
        let multiplier = to_decimal(multiplier, "mul")?;
        self.amount
            .checked_mul(multiplier)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow { operation: "mul" })
    }

    /// Divides the amount by a scalar, keeping the currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Unrepresentable`] if the scalar has no decimal
    /// value, [`MoneyError::DivisionByZero`] for a zero divisor and
    /// [`MoneyError::Overflow`] if the quotient is out of range.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, divisor: impl TryInto<Decimal>) -> MoneyResult<Self> {
        let divisor = to_decimal(divisor, "div")?;
        if divisor.is_zero() {
            log::debug!("refusing to divide {} by zero", self);
            return Err(MoneyError::DivisionByZero {
                amount: self.amount,
            });
        }
        self.amount
            .checked_div(divisor)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow { operation: "div" })
    }

    /// Sums amounts into `currency`, failing on the first foreign one.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if any item is in another
    /// currency.
    pub fn sum<'a, I>(items: I, currency: Currency) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        items
            .into_iter()
            .try_fold(Self::zero(currency), |acc, item| acc.add(item))
    }

    fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
        }
    }

    fn rounded_amount(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(self.currency.digits(), RoundingStrategy::MidpointAwayFromZero)
    }

    fn ensure_same_currency(&self, other: &Self, operation: &str) -> MoneyResult<()> {
        if self.same_currency(other) {
            return Ok(());
        }
        log::debug!(
            "{} refused: {} and {} are in different currencies",
            operation,
            self,
            other
        );
        Err(MoneyError::currency_mismatch(
            self.currency.code(),
            other.currency.code(),
        ))
    }
}

fn to_decimal(value: impl TryInto<Decimal>, operation: &'static str) -> MoneyResult<Decimal> {
    value
        .try_into()
        .map_err(|_| MoneyError::Unrepresentable { operation })
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency == other.currency {
            self.amount.partial_cmp(&other.amount)
        } else {
            None // Can't order amounts in different currencies
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.currency.digits() as usize;
        let amount = self.rounded_amount();
        match self.currency.symbol() {
            Some(symbol) => write!(f, "{}{:.*}", symbol, digits, amount),
            None => write!(f, "{} {:.*}", self.currency.code(), digits, amount),
        }
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Money {}>", self)
    }
}
