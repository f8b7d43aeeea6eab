//! # Coinpurse Core
//!
//! Currency descriptors and currency-checked monetary amounts.
//!
//! - **Types**: [`Currency`] describes a monetary unit, [`Money`] pairs an
//!   amount with one
//! - **Registry**: code-based lookup of currencies, seeded with common ISO 4217
//!   currencies
//! - **Config**: currency tables loaded from TOML
//!
//! Amounts are [`rust_decimal::Decimal`]s, so arithmetic is exact within its
//! 28-digit range and never produces NaN or infinity.
//!
//! ## Example
//!
//! ```rust
//! use coinpurse_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let usd = Currency::new("US Dollar", "USD").with_symbol("$");
//! let price = Money::new(dec!(19.999), usd.clone());
//! assert_eq!(price.to_string(), "$20.00");
//!
//! let total = price.add(&Money::new(dec!(0.001), usd)).unwrap();
//! assert_eq!(total.amount(), dec!(20));
//!
//! let yen = Money::new(100, Currency::new("Japanese Yen", "JPY").with_digits(0));
//! assert!(total.add(&yen).unwrap_err().is_currency_mismatch());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod error;
pub mod registry;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::CurrencyConfig;
    pub use crate::error::{MoneyError, MoneyResult};
    pub use crate::registry::CurrencyRegistry;
    pub use crate::types::{Currency, Money};
}

// Re-export commonly used types at crate root
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, Money};
