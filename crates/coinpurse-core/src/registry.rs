//! Lookup of currencies by code.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};
use crate::types::{Currency, Money};

/// A set of currencies keyed by their code.
///
/// Lookups are case-insensitive. Registered currencies have their code
/// upper-cased, so the stored currency always carries the code it is keyed
/// by. The registry owns its currencies and hands out clones, so amounts
/// built from it compare equal to each other.
///
/// # Example
///
/// ```rust
/// use coinpurse_core::registry::CurrencyRegistry;
/// use rust_decimal_macros::dec;
///
/// let registry = CurrencyRegistry::with_defaults();
/// let price = registry.money(dec!(9.5), "usd").unwrap();
/// assert_eq!(price.to_string(), "$9.50");
/// assert!(registry.get("XXX").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    currencies: BTreeMap<String, Currency>,
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in currencies.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for currency in Currency::builtins() {
            registry.register(currency);
        }
        registry
    }

    /// Adds a currency under its upper-cased code, returning the entry it
    /// replaced.
    pub fn register(&mut self, currency: Currency) -> Option<Currency> {
        let currency = currency.into_canonical();
        self.currencies.insert(currency.code().to_string(), currency)
    }

    /// Looks up a currency by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.currencies.get(&code.to_ascii_uppercase())
    }

    /// Looks up a currency by code, failing if it is not registered.
    pub fn require(&self, code: &str) -> MoneyResult<&Currency> {
        self.get(code).ok_or_else(|| MoneyError::unknown_currency(code))
    }

    /// Builds an amount in the currency registered under `code`.
    pub fn money(&self, amount: impl Into<Decimal>, code: &str) -> MoneyResult<Money> {
        let currency = self.require(code)?;
        Ok(Money::new(amount, currency.clone()))
    }

    /// Returns true if `code` is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if no currency is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Registered codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.currencies.keys().map(String::as_str)
    }

    /// Registered currencies ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.values()
    }
}
