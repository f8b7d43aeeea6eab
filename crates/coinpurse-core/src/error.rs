//! Error types for Coinpurse.
//!
//! Every fallible operation in the crate returns [`MoneyResult`], so callers
//! can propagate failures with `?` and match on the variant when they need
//! to react to a specific condition.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Coinpurse operations.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// The main error type for Coinpurse operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: String,
        /// Currency of the right-hand operand.
        found: String,
    },

    /// An amount was divided by zero.
    #[error("Division by zero: cannot divide {amount}")]
    DivisionByZero {
        /// The dividend.
        amount: Decimal,
    },

    /// The result does not fit in the amount representation.
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
    },

    /// A scalar or amount has no decimal value (NaN, infinite, or out of range).
    #[error("Value not representable as a decimal in {operation}")]
    Unrepresentable {
        /// Name of the operation that received the value.
        operation: &'static str,
    },

    /// Currency code not present in a registry.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The code that was looked up.
        code: String,
    },

    /// Currency definition rejected while loading configuration.
    #[error("Invalid currency {code}: {reason}")]
    InvalidCurrency {
        /// Code of the offending entry.
        code: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl MoneyError {
    /// Creates a currency mismatch error from the two currency codes.
    #[must_use]
    pub fn currency_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }

    /// Creates an invalid currency error.
    #[must_use]
    pub fn invalid_currency(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCurrency {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config_error(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a currency mismatch.
    #[must_use]
    pub fn is_currency_mismatch(&self) -> bool {
        matches!(self, Self::CurrencyMismatch { .. })
    }
}
